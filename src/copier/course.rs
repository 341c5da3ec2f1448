//! Course-folder processing: copy every qualifying access group.

use std::collections::HashSet;

use tracing::{debug, info};
use uuid::Uuid;

use super::Copier;
use crate::error::CliResult;
use crate::models::Role;

impl Copier {
    /// Copy the access groups of one course folder.
    ///
    /// Creator groups are copied with the Creator role. A group holding
    /// both Creator and Viewer access is only processed for Creator:
    /// Creator access already implies viewing, and the platform rejects
    /// the redundant second grant.
    pub async fn process_course_folder(&mut self, folder_id: Uuid) -> CliResult<()> {
        let details = self.client.get_folder_access_details(folder_id).await?;
        info!(folder = %folder_id, "Fetched course folder access details");
        debug!(?details);

        let creator_groups = details.groups_with_creator_access.unwrap_or_default();
        let viewer_groups = details.groups_with_viewer_access.unwrap_or_default();
        let viewer_only: HashSet<Uuid> = viewer_groups
            .difference(&creator_groups)
            .copied()
            .collect();

        for &group_id in &creator_groups {
            let outcome = self.copy_group(group_id, folder_id, Role::Creator).await?;
            self.stats.record(&outcome);
        }

        for &group_id in &viewer_only {
            let outcome = self.copy_group(group_id, folder_id, Role::Viewer).await?;
            self.stats.record(&outcome);
        }

        Ok(())
    }
}
