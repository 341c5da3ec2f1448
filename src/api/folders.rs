//! Folder lookups against the session-management service.

use serde_json::json;
use uuid::Uuid;

use super::{PlatformClient, SESSION_MANAGEMENT};
use crate::error::{CliError, CliResult};
use crate::models::Folder;

impl PlatformClient {
    /// Resolve folder records by id, in the requested order.
    ///
    /// The remote endpoint rejects id lists above an undocumented ceiling,
    /// so requests are issued in chunks of at most
    /// [`folder_batch_limit`](PlatformClient::with_folder_batch_limit) ids.
    pub async fn get_folders_by_id(&self, folder_ids: &[Uuid]) -> CliResult<Vec<Folder>> {
        let mut folders = Vec::with_capacity(folder_ids.len());
        for chunk in folder_ids.chunks(self.folder_batch_limit()) {
            let batch: Vec<Folder> = self
                .rpc(
                    SESSION_MANAGEMENT,
                    "GetFoldersById",
                    json!({ "folderIds": chunk }),
                )
                .await?;
            folders.extend(batch);
        }
        Ok(folders)
    }

    /// Resolve a single folder record.
    pub async fn get_folder(&self, folder_id: Uuid) -> CliResult<Folder> {
        self.get_folders_by_id(&[folder_id])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CliError::NotFound(format!("folder {folder_id}")))
    }
}
