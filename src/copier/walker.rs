//! Hierarchy traversal from term and department folders down to courses.

use tracing::{debug, info};
use uuid::Uuid;

use super::Copier;
use crate::error::CliResult;

impl Copier {
    /// Process every course folder under a department folder.
    ///
    /// Children are resolved through the size-bounded batch lookup, so a
    /// large department never produces an oversized folder request.
    pub async fn process_department(&mut self, folder_id: Uuid) -> CliResult<()> {
        let folder = self.client.get_folder(folder_id).await?;
        info!(folder = %folder.name, "Processing department folder");
        debug!(?folder);

        if folder.child_ids().is_empty() {
            info!(folder = %folder.name, "Department folder has no course folders");
            return Ok(());
        }
        info!(
            folder = %folder.name,
            children = folder.child_ids().len(),
            "Resolving course folders"
        );

        let children = self.client.get_folders_by_id(folder.child_ids()).await?;
        for child in children {
            info!(course = %child.name, department = %folder.name, "Processing course folder");
            self.process_course_folder(child.id).await?;
        }
        Ok(())
    }

    /// Process every department folder under a term folder.
    pub async fn process_term(&mut self, folder_id: Uuid) -> CliResult<()> {
        let folder = self.client.get_folder(folder_id).await?;
        info!(
            folder = %folder.name,
            children = folder.child_ids().len(),
            "Processing term folder"
        );
        debug!(?folder);

        for &child_id in folder.child_ids() {
            self.process_department(child_id).await?;
        }
        Ok(())
    }
}
