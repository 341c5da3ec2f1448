//! The single-group copy procedure.

use std::fmt;

use sha1::{Digest, Sha1};
use tracing::{debug, error, info};
use uuid::Uuid;

use super::Copier;
use crate::error::CliResult;
use crate::models::{Group, GroupType, Role};

/// Why a group was not copied. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Internally-managed groups are not copy candidates.
    NotExternal,
    /// Fed by a provider the configured filter does not accept.
    ProviderMismatch,
    /// Name did not match the configured filter pattern.
    NameFiltered,
    /// Membership was absent or empty; an empty mirror is useless.
    NoMembers,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::NotExternal => "not an external group",
            SkipReason::ProviderMismatch => "membership provider not accepted",
            SkipReason::NameFiltered => "name does not match filter",
            SkipReason::NoMembers => "no members",
        };
        f.write_str(s)
    }
}

/// Result of one group-copy attempt.
#[derive(Debug, Clone)]
pub enum CopyOutcome {
    /// The internal mirror group that received the grant. In dry-run mode
    /// this is the source group standing in for the mirror.
    Copied(Group),
    /// The group did not qualify; nothing was created or granted.
    Skipped(SkipReason),
    /// Creation or grant faulted; logged, siblings unaffected.
    Failed,
}

/// Derive the mirror group's name.
///
/// Internal group names are globally unique on the platform, but the same
/// externally-named group is expected to be mirrored onto many folders, so
/// the name carries a suffix derived from the (name, destination folder)
/// pair: the first 6 hex chars of SHA-1 over the name followed by the
/// folder id in canonical hyphenated form.
pub fn internal_group_name(name: &str, folder_id: Uuid) -> String {
    let mut hasher = Sha1::new();
    hasher.update(name.as_bytes());
    hasher.update(folder_id.to_string().as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{name} (internal {})", &digest[..6])
}

impl Copier {
    /// Copy one externally-managed group onto a folder with the given role.
    ///
    /// Read faults (group metadata, membership) propagate and end the run.
    /// Mutation faults (create, grant) are logged and reported as
    /// [`CopyOutcome::Failed`] so the caller continues with siblings.
    pub async fn copy_group(
        &self,
        group_id: Uuid,
        folder_id: Uuid,
        role: Role,
    ) -> CliResult<CopyOutcome> {
        let group = self.client.get_group(group_id).await?;
        info!(group = %group.name, "Fetched group");
        debug!(?group);

        if let Some(reason) = self.skip_reason(&group) {
            info!(group = %group.name, %reason, "Skipping group");
            return Ok(CopyOutcome::Skipped(reason));
        }

        let members = match self.client.get_users_in_group(group_id).await? {
            Some(members) if !members.is_empty() => members,
            _ => {
                info!(group = %group.name, "Group has no members, skipping");
                return Ok(CopyOutcome::Skipped(SkipReason::NoMembers));
            }
        };
        info!(group = %group.name, members = members.len(), "Fetched group membership");
        debug!(?members);

        let mirror_name = internal_group_name(&group.name, folder_id);

        if self.options.dry_run {
            info!(group = %mirror_name, members = members.len(), "Would create internal group");
            info!(group = %mirror_name, %role, folder = %folder_id, "Would grant folder access");
            return Ok(CopyOutcome::Copied(group));
        }

        let mirror = match self.client.create_internal_group(&mirror_name, &members).await {
            Ok(mirror) => mirror,
            Err(e) => {
                error!(
                    group = %group.name,
                    folder = %folder_id,
                    error = %e,
                    "Failed to create internal group"
                );
                return Ok(CopyOutcome::Failed);
            }
        };
        info!(group = %mirror.name, "Created internal group");
        debug!(?mirror);

        match self
            .client
            .grant_group_access(folder_id, mirror.id, role)
            .await
        {
            Ok(()) => {
                info!(group = %mirror.name, %role, folder = %folder_id, "Granted folder access");
                Ok(CopyOutcome::Copied(mirror))
            }
            Err(e) => {
                error!(
                    group = %mirror.name,
                    folder = %folder_id,
                    error = %e,
                    "Failed to grant folder access"
                );
                Ok(CopyOutcome::Failed)
            }
        }
    }

    fn skip_reason(&self, group: &Group) -> Option<SkipReason> {
        if group.group_type != GroupType::External {
            return Some(SkipReason::NotExternal);
        }
        if !self
            .options
            .provider
            .accepts(&group.membership_provider_name)
        {
            return Some(SkipReason::ProviderMismatch);
        }
        if let Some(filter) = &self.options.name_filter {
            if !filter.is_match(&group.name) {
                return Some(SkipReason::NameFiltered);
            }
        }
        None
    }
}
