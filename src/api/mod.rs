//! HTTP client for the remote video platform.
//!
//! The platform exposes three services: session management (folders),
//! access management (folder grants), and user management (groups). Every
//! operation is a JSON POST RPC to `{base}/{Service}/{Method}` carrying the
//! signed [`AuthInfo`] value in the request body.

mod access;
mod folders;
mod groups;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::auth::AuthInfo;
use crate::error::{CliError, CliResult};

pub(crate) const SESSION_MANAGEMENT: &str = "SessionManagement";
pub(crate) const ACCESS_MANAGEMENT: &str = "AccessManagement";
pub(crate) const USER_MANAGEMENT: &str = "UserManagement";

/// Largest id list the folder-lookup endpoint reliably accepts in one call.
/// The remote rejects somewhere around 53; stay under it.
pub const DEFAULT_FOLDER_BATCH_LIMIT: usize = 50;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the platform's remote services.
///
/// Holds the signed auth value and the underlying `reqwest::Client`;
/// read-only after construction.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    base_url: String,
    auth: AuthInfo,
    http: Client,
    folder_batch_limit: usize,
}

impl PlatformClient {
    /// Create a client for the given platform host.
    pub fn new(host: &str, auth: AuthInfo) -> CliResult<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("course-group-copy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_http_client(
            format!("https://{host}/PublicAPI"),
            auth,
            http,
        ))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(base_url: String, auth: AuthInfo, http: Client) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            auth,
            http,
            folder_batch_limit: DEFAULT_FOLDER_BATCH_LIMIT,
        }
    }

    /// Override the folder-lookup batch ceiling.
    #[must_use]
    pub fn with_folder_batch_limit(mut self, limit: usize) -> Self {
        self.folder_batch_limit = limit.max(1);
        self
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn folder_batch_limit(&self) -> usize {
        self.folder_batch_limit
    }

    // ── Internal RPC plumbing ─────────────────────────────────────────

    /// POST an RPC call and deserialize the JSON result.
    pub(crate) async fn rpc<T: DeserializeOwned>(
        &self,
        service: &str,
        method: &str,
        params: Value,
    ) -> CliResult<T> {
        let response = self.send(service, method, params).await?;
        self.handle_response(response).await
    }

    /// POST an RPC call whose success result carries no body.
    pub(crate) async fn rpc_unit(
        &self,
        service: &str,
        method: &str,
        params: Value,
    ) -> CliResult<()> {
        let response = self.send(service, method, params).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            self.handle_error_response(response).await
        }
    }

    async fn send(
        &self,
        service: &str,
        method: &str,
        mut params: Value,
    ) -> CliResult<reqwest::Response> {
        let url = format!("{}/{}/{}", self.base_url, service, method);
        debug!("RPC POST {}", url);
        params["auth"] = serde_json::to_value(&self.auth)?;
        self.http
            .post(&url)
            .json(&params)
            .send()
            .await
            .map_err(Into::into)
    }

    // ── Response handling ─────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> CliResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| CliError::Parse(format!("Failed to parse response: {e}")))
        } else {
            self.handle_error_response(response).await
        }
    }

    async fn handle_error_response<T>(&self, response: reqwest::Response) -> CliResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());

        match status {
            StatusCode::NOT_FOUND => Err(CliError::NotFound(body)),
            StatusCode::CONFLICT => Err(CliError::Conflict(body)),
            _ => {
                let detail = if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body
                };
                Err(CliError::Api {
                    status: status.as_u16(),
                    detail,
                })
            }
        }
    }
}
