//! Traversal and group-copy engine.
//!
//! Walks the platform's folder hierarchy from a chosen starting level down
//! to course folders, and mirrors each course folder's externally-managed
//! access groups as internally-managed groups holding the same role. One
//! group's failure never aborts its siblings; outcomes are tallied into run
//! statistics instead.

mod course;
mod group_copy;
mod walker;

pub use group_copy::{internal_group_name, CopyOutcome, SkipReason};

use clap::ValueEnum;
use regex::Regex;
use uuid::Uuid;

use crate::api::PlatformClient;
use crate::config::ProviderFilter;
use crate::error::CliResult;

/// Where in the hierarchy a run starts.
///
/// There are no runtime transitions between levels: the starting level is
/// chosen once and determines which procedure runs. Term and department
/// runs both bottom out in the course-folder processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartLevel {
    /// A term folder: every child is a department folder.
    Term,
    /// A department folder: every child is a course folder.
    Dept,
    /// A single course folder.
    Course,
}

/// Options controlling a copy run.
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Log intended mutations without issuing them.
    pub dry_run: bool,
    /// Only copy groups whose name matches.
    pub name_filter: Option<Regex>,
    /// Only copy groups fed by an accepted membership provider.
    pub provider: ProviderFilter,
}

/// Per-run outcome counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub copied: u32,
    pub skipped: u32,
    pub failed: u32,
}

impl CopyStats {
    fn record(&mut self, outcome: &CopyOutcome) {
        match outcome {
            CopyOutcome::Copied(_) => self.copied += 1,
            CopyOutcome::Skipped(_) => self.skipped += 1,
            CopyOutcome::Failed => self.failed += 1,
        }
    }
}

/// Copy engine: owns the service client and run options, accumulates
/// statistics as folders are processed.
pub struct Copier {
    client: PlatformClient,
    options: CopyOptions,
    stats: CopyStats,
}

impl Copier {
    pub fn new(client: PlatformClient, options: CopyOptions) -> Self {
        Self {
            client,
            options,
            stats: CopyStats::default(),
        }
    }

    /// Outcome counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> CopyStats {
        self.stats
    }

    /// Run the copy starting at the given level and folder.
    pub async fn run(&mut self, level: StartLevel, folder_id: Uuid) -> CliResult<()> {
        match level {
            StartLevel::Term => self.process_term(folder_id).await,
            StartLevel::Dept => self.process_department(folder_id).await,
            StartLevel::Course => self.process_course_folder(folder_id).await,
        }
    }
}
