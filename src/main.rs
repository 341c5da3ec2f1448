//! course-group-copy - mirror course access groups on a video platform
//!
//! Given a term, department, or course folder, walks the folder hierarchy
//! and copies each course folder's externally-managed access groups to
//! internally-managed groups holding the same role.

use clap::Parser;
use regex::Regex;
use tracing::{info, warn};
use uuid::Uuid;

use course_group_copy::api::PlatformClient;
use course_group_copy::auth::AuthInfo;
use course_group_copy::config::Config;
use course_group_copy::copier::{Copier, CopyOptions, StartLevel};
use course_group_copy::error::{CliError, CliResult};
use course_group_copy::logging;

/// Copy a course folder's user groups to internal ones. Given a term or
/// department folder, traverses the folder hierarchy and copies the groups
/// of every descendant course folder.
#[derive(Parser)]
#[command(name = "course-group-copy")]
#[command(author, version, about)]
struct Cli {
    /// Starting folder level
    #[arg(value_enum, default_value = "term")]
    level: StartLevel,

    /// Starting folder id (defaults to FOLDER from the environment)
    folder: Option<Uuid>,

    /// Only copy groups whose name matches this pattern
    #[arg(long, value_parser = parse_regex)]
    filter: Option<Regex>,

    /// Log intended group creations and grants without performing them
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn parse_regex(s: &str) -> Result<Regex, regex::Error> {
    Regex::new(s)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;
    logging::init_logging(&config.log_level);

    let folder = cli.folder.or(config.default_folder).ok_or_else(|| {
        CliError::Validation(
            "No starting folder: pass a folder id or set FOLDER in the environment".to_string(),
        )
    })?;

    if cli.dry_run {
        warn!("Dry run, no groups will be created");
    }

    let auth = AuthInfo::new(&config.idp, &config.username, &config.host, &config.app_key);
    let client = PlatformClient::new(&config.host, auth)?;
    let options = CopyOptions {
        dry_run: cli.dry_run,
        name_filter: cli.filter,
        provider: config.provider,
    };

    let mut copier = Copier::new(client, options);
    copier.run(cli.level, folder).await?;

    let stats = copier.stats();
    info!(
        copied = stats.copied,
        skipped = stats.skipped,
        failed = stats.failed,
        "Run complete"
    );
    Ok(())
}
