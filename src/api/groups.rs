//! Group operations against the user-management service.

use serde_json::json;
use uuid::Uuid;

use super::{PlatformClient, USER_MANAGEMENT};
use crate::error::CliResult;
use crate::models::Group;

impl PlatformClient {
    /// Fetch a group's metadata. Membership is not included; see
    /// [`get_users_in_group`](PlatformClient::get_users_in_group).
    pub async fn get_group(&self, group_id: Uuid) -> CliResult<Group> {
        self.rpc(USER_MANAGEMENT, "GetGroup", json!({ "groupId": group_id }))
            .await
    }

    /// Fetch a group's member ids.
    ///
    /// The service returns `null` rather than an empty list for groups it
    /// has no membership for; callers must treat both as "no members".
    pub async fn get_users_in_group(&self, group_id: Uuid) -> CliResult<Option<Vec<Uuid>>> {
        self.rpc(
            USER_MANAGEMENT,
            "GetUsersInGroup",
            json!({ "groupId": group_id }),
        )
        .await
    }

    /// Create an internally-managed group with the given members.
    ///
    /// Faults with a conflict if the name collides with an existing
    /// internal group; internal group names are globally unique.
    pub async fn create_internal_group(
        &self,
        group_name: &str,
        member_ids: &[Uuid],
    ) -> CliResult<Group> {
        self.rpc(
            USER_MANAGEMENT,
            "CreateInternalGroup",
            json!({
                "groupName": group_name,
                "memberIds": member_ids,
            }),
        )
        .await
    }
}
