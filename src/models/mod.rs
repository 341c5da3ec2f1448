//! Wire records returned by the remote platform services

mod access;
mod folder;
mod group;

pub use access::{FolderAccessDetails, Role};
pub use folder::Folder;
pub use group::{Group, GroupType};
