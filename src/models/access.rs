//! Folder access-control records and roles.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access level a group holds on a folder. Serialized as the four literal
/// role strings the access-management service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Creator,
    Viewer,
    ViewerWithLink,
    Publisher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Creator => "Creator",
            Role::Viewer => "Viewer",
            Role::ViewerWithLink => "ViewerWithLink",
            Role::Publisher => "Publisher",
        };
        f.write_str(s)
    }
}

/// Group-level access state of a folder.
///
/// The service reports each role set as `null` when no group holds that
/// role, so both sets are optional on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FolderAccessDetails {
    #[serde(default)]
    pub groups_with_creator_access: Option<HashSet<Uuid>>,
    #[serde(default)]
    pub groups_with_viewer_access: Option<HashSet<Uuid>>,
}
