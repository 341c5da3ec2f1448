//! Mock platform services using wiremock for integration testing.
//!
//! Simulates the three remote services (session management, access
//! management, user management) with configurable success and fault
//! scenarios, and builds clients pointed at the mock.

#![allow(dead_code)]

use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use course_group_copy::api::PlatformClient;
use course_group_copy::auth::AuthInfo;
use course_group_copy::config::ProviderFilter;
use course_group_copy::copier::{Copier, CopyOptions};

/// Provider name used by eligible test groups.
pub const TEST_PROVIDER: &str = "campus-lms";

/// A mock platform wrapping the three service endpoints.
pub struct MockPlatform {
    server: MockServer,
}

impl MockPlatform {
    /// Start a new mock platform.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URI of the mock server.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Access the underlying wiremock server for custom mocks.
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Create a `PlatformClient` configured to talk to this mock.
    pub fn client(&self) -> PlatformClient {
        PlatformClient::with_http_client(self.server.uri(), test_auth(), reqwest::Client::new())
    }

    /// Create a `Copier` over this mock with the given options.
    pub fn copier(&self, options: CopyOptions) -> Copier {
        Copier::new(self.client(), options)
    }

    /// Create a `Copier` with default live-run options (no dry run, accept
    /// any provider, no name filter).
    pub fn default_copier(&self) -> Copier {
        self.copier(live_options())
    }

    // ── Session management mocks ─────────────────────────────────────

    /// Mount a folder lookup responding to a single-id request for this
    /// folder.
    pub async fn mock_folder(&self, folder: &Value) {
        Mock::given(method("POST"))
            .and(path("/SessionManagement/GetFoldersById"))
            .and(body_partial_json(json!({ "folderIds": [folder["Id"]] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([folder])))
            .mount(&self.server)
            .await;
    }

    /// Mount a folder lookup answering every request from the given
    /// records, asserting no request exceeds `max_ids` ids. Expects
    /// exactly `expected_calls` calls.
    pub async fn mock_folder_lookup(&self, folders: Vec<Value>, max_ids: usize, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/SessionManagement/GetFoldersById"))
            .respond_with(move |req: &Request| {
                let body: Value = serde_json::from_slice(&req.body).unwrap_or(json!({}));
                let requested: Vec<String> = body["folderIds"]
                    .as_array()
                    .map(|ids| {
                        ids.iter()
                            .filter_map(|v| v.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default();

                if requested.len() > max_ids {
                    return ResponseTemplate::new(500).set_body_json(json!({
                        "error": format!("too many folder ids: {}", requested.len())
                    }));
                }

                let matched: Vec<&Value> = requested
                    .iter()
                    .filter_map(|id| {
                        folders
                            .iter()
                            .find(|f| f["Id"].as_str() == Some(id.as_str()))
                    })
                    .collect();
                ResponseTemplate::new(200).set_body_json(json!(matched))
            })
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    // ── Access management mocks ──────────────────────────────────────

    /// Mount access details for one folder. `None` sets serialize as
    /// `null`, matching the service's absent-set behavior.
    pub async fn mock_access_details(
        &self,
        folder_id: Uuid,
        creator_groups: Option<Vec<Uuid>>,
        viewer_groups: Option<Vec<Uuid>>,
    ) {
        Mock::given(method("POST"))
            .and(path("/AccessManagement/GetFolderAccessDetails"))
            .and(body_partial_json(json!({ "folderId": folder_id })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "GroupsWithCreatorAccess": creator_groups,
                "GroupsWithViewerAccess": viewer_groups,
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount empty access details for any folder, expecting exactly
    /// `expected_calls` calls.
    pub async fn mock_access_details_empty(&self, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/AccessManagement/GetFolderAccessDetails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "GroupsWithCreatorAccess": null,
                "GroupsWithViewerAccess": null,
            })))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Mount a successful grant, expecting exactly `expected_calls` calls.
    pub async fn mock_grant(&self, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/AccessManagement/GrantGroupAccessToFolder"))
            .respond_with(ResponseTemplate::new(200))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Mount a successful grant matching a specific role, expecting
    /// exactly `expected_calls` calls.
    pub async fn mock_grant_role(&self, role: &str, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/AccessManagement/GrantGroupAccessToFolder"))
            .and(body_partial_json(json!({ "role": role })))
            .respond_with(ResponseTemplate::new(200))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Mount a faulting grant.
    pub async fn mock_grant_fault(&self) {
        Mock::given(method("POST"))
            .and(path("/AccessManagement/GrantGroupAccessToFolder"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": "invalid role/folder/group combination"
            })))
            .mount(&self.server)
            .await;
    }

    // ── User management mocks ────────────────────────────────────────

    /// Mount group metadata for one group id.
    pub async fn mock_group(&self, group: &Value) {
        Mock::given(method("POST"))
            .and(path("/UserManagement/GetGroup"))
            .and(body_partial_json(json!({ "groupId": group["Id"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(group.clone()))
            .mount(&self.server)
            .await;
    }

    /// Mount group membership for one group id.
    pub async fn mock_members(&self, group_id: Uuid, member_ids: &[Uuid]) {
        Mock::given(method("POST"))
            .and(path("/UserManagement/GetUsersInGroup"))
            .and(body_partial_json(json!({ "groupId": group_id })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(member_ids)))
            .mount(&self.server)
            .await;
    }

    /// Mount an absent (`null`) membership result for one group id.
    pub async fn mock_members_absent(&self, group_id: Uuid) {
        Mock::given(method("POST"))
            .and(path("/UserManagement/GetUsersInGroup"))
            .and(body_partial_json(json!({ "groupId": group_id })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .mount(&self.server)
            .await;
    }

    /// Mount a group creation that echoes the requested name back as a new
    /// internal group.
    pub async fn mock_create_group(&self) {
        Mock::given(method("POST"))
            .and(path("/UserManagement/CreateInternalGroup"))
            .respond_with(create_group_responder)
            .mount(&self.server)
            .await;
    }

    /// Like [`mock_create_group`](Self::mock_create_group), but only
    /// matches `up_to` times. Later calls fall through to other mounted
    /// creation mocks.
    pub async fn mock_create_group_up_to(&self, up_to: u64) {
        Mock::given(method("POST"))
            .and(path("/UserManagement/CreateInternalGroup"))
            .respond_with(create_group_responder)
            .up_to_n_times(up_to)
            .mount(&self.server)
            .await;
    }

    /// Mount a group creation rejected with a name conflict.
    pub async fn mock_create_group_conflict(&self) {
        Mock::given(method("POST"))
            .and(path("/UserManagement/CreateInternalGroup"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "error": "an internal group with this name already exists"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount zero-call expectations on both mutating endpoints.
    pub async fn expect_no_mutations(&self) {
        Mock::given(method("POST"))
            .and(path("/UserManagement/CreateInternalGroup"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/AccessManagement/GrantGroupAccessToFolder"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}

fn create_group_responder(req: &Request) -> ResponseTemplate {
    let body: Value = serde_json::from_slice(&req.body).unwrap_or(json!({}));
    let name = body["groupName"].as_str().unwrap_or("unknown");
    ResponseTemplate::new(200).set_body_json(json!({
        "Id": Uuid::new_v4(),
        "Name": name,
        "GroupType": "Internal",
    }))
}

/// Auth value used by every test client.
pub fn test_auth() -> AuthInfo {
    AuthInfo::new("campus", "svc-video", "video.example.edu", "app-secret")
}

/// Live-run options accepting any provider with no name filter.
pub fn live_options() -> CopyOptions {
    CopyOptions {
        dry_run: false,
        name_filter: None,
        provider: ProviderFilter::AcceptAny,
    }
}

// ── Record builders ──────────────────────────────────────────────────

pub fn folder_json(id: Uuid, name: &str, children: Option<Vec<Uuid>>) -> Value {
    match children {
        Some(children) => json!({ "Id": id, "Name": name, "ChildFolders": children }),
        None => json!({ "Id": id, "Name": name }),
    }
}

pub fn external_group_json(id: Uuid, name: &str, provider: &str) -> Value {
    json!({
        "Id": id,
        "Name": name,
        "GroupType": "External",
        "MembershipProviderName": provider,
    })
}

pub fn internal_group_json(id: Uuid, name: &str) -> Value {
    json!({
        "Id": id,
        "Name": name,
        "GroupType": "Internal",
    })
}
