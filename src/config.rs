//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading: required variables must be present and valid or the
//! run aborts with a clear error before any remote call is made. A `.env`
//! file in the working directory is honored (loaded in `main` before this
//! module reads the environment).

use std::env;

use uuid::Uuid;

use crate::error::{CliError, CliResult};

/// Which upstream membership providers qualify a group for copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderFilter {
    /// Accept groups from any provider.
    AcceptAny,
    /// Accept only groups whose provider name matches exactly.
    Exact(String),
}

impl ProviderFilter {
    /// Parse from the `PROVIDER` config value. Unset, empty, or `*` means
    /// accept-any.
    pub fn from_config_value(value: Option<&str>) -> Self {
        match value {
            None => Self::AcceptAny,
            Some(v) if v.is_empty() || v == "*" => Self::AcceptAny,
            Some(v) => Self::Exact(v.to_string()),
        }
    }

    /// Whether a group with the given provider name qualifies.
    pub fn accepts(&self, provider: &str) -> bool {
        match self {
            Self::AcceptAny => true,
            Self::Exact(name) => name == provider,
        }
    }
}

/// Runtime configuration for a copy run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote platform hostname, e.g. `video.example.edu`.
    pub host: String,
    /// Identity-provider prefix used in the signing user key.
    pub idp: String,
    /// Service account name.
    pub username: String,
    /// Shared signing secret.
    pub app_key: String,
    /// Default starting folder when none is given on the command line.
    pub default_folder: Option<Uuid>,
    /// Membership-provider filter for group eligibility.
    pub provider: ProviderFilter,
    /// Tracing filter directive, e.g. `info` or `course_group_copy=debug`.
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> CliResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CliResult<Self> {
        // Empty values behave as unset so a templated .env with blank lines
        // does not shadow required-variable validation.
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let require = |key: &str| {
            get(key).ok_or_else(|| {
                CliError::Config(format!("Missing required environment variable: {key}"))
            })
        };

        let default_folder = get("FOLDER")
            .map(|v| {
                v.parse::<Uuid>().map_err(|e| {
                    CliError::Config(format!("Invalid value for FOLDER: {e}"))
                })
            })
            .transpose()?;

        Ok(Self {
            host: require("HOST")?,
            idp: require("IDP")?,
            username: require("USERNAME")?,
            app_key: require("APP_KEY")?,
            default_folder,
            provider: ProviderFilter::from_config_value(get("PROVIDER").as_deref()),
            log_level: get("LOGLEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}
