//! Folder records from the platform hierarchy.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node in the platform's organizational hierarchy.
///
/// Term folders contain department folders, department folders contain
/// course folders, and course folders are leaves for traversal purposes.
/// The platform omits `ChildFolders` entirely for some leaf folders, so an
/// absent list and an empty list are both legitimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_folders: Option<Vec<Uuid>>,
}

impl Folder {
    /// Child folder ids, normalizing an absent list to empty.
    pub fn child_ids(&self) -> &[Uuid] {
        self.child_folders.as_deref().unwrap_or_default()
    }
}
