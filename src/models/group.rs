//! Group records from the platform's user-management service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a group's membership is owned by the platform or synchronized
/// from an upstream identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupType {
    /// Created and owned on the platform; membership is managed there.
    Internal,
    /// Fed from an upstream identity provider; read-only from our side.
    External,
}

/// A platform group.
///
/// `GetGroup` returns the group's metadata only; membership is a separate
/// `GetUsersInGroup` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub group_type: GroupType,
    /// Name of the upstream provider feeding this group. Empty for
    /// internal groups.
    #[serde(default)]
    pub membership_provider_name: String,
}
