//! Folder access-control operations against the access-management service.

use serde_json::json;
use uuid::Uuid;

use super::{PlatformClient, ACCESS_MANAGEMENT};
use crate::error::CliResult;
use crate::models::{FolderAccessDetails, Role};

impl PlatformClient {
    /// Fetch the group-level access state of a folder.
    pub async fn get_folder_access_details(
        &self,
        folder_id: Uuid,
    ) -> CliResult<FolderAccessDetails> {
        self.rpc(
            ACCESS_MANAGEMENT,
            "GetFolderAccessDetails",
            json!({ "folderId": folder_id }),
        )
        .await
    }

    /// Grant a group the given role on a folder.
    ///
    /// The service faults on an invalid role/folder/group combination and on
    /// a redundant duplicate grant.
    pub async fn grant_group_access(
        &self,
        folder_id: Uuid,
        group_id: Uuid,
        role: Role,
    ) -> CliResult<()> {
        self.rpc_unit(
            ACCESS_MANAGEMENT,
            "GrantGroupAccessToFolder",
            json!({
                "folderId": folder_id,
                "groupId": group_id,
                "role": role,
            }),
        )
        .await
    }
}
