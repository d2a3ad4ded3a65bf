//! Workload configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use trendz_core::{ResolutionPolicy, JWT_COOKIE};
use trendz_data::{FetchClient, Transport};
use trendz_observability::{LogFormat, LogLevel};

use crate::data::API_BASE;

/// Settings for the product details page.
///
/// Defaults match the storefront's production behavior: the public catalog
/// API, the `jwt_token` cookie, no request timeout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Catalog API base URL.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Credential key holding the bearer token.
    #[serde(default = "default_credential_key")]
    pub credential_key: String,

    /// Per-request timeout in milliseconds. Unset means no deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,

    /// What to do with responses to superseded requests.
    #[serde(default)]
    pub resolution_policy: ResolutionPolicy,

    /// Minimum log level.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_api_base() -> String {
    API_BASE.to_string()
}

fn default_credential_key() -> String {
    JWT_COOKIE.to_string()
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            credential_key: default_credential_key(),
            request_timeout_ms: None,
            resolution_policy: ResolutionPolicy::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl WorkloadConfig {
    /// Load config from a TOML or JSON file (by extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Request timeout, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Fetch client pointed at the configured API over `transport`.
    pub fn fetch_client(&self, transport: impl Transport + 'static) -> FetchClient {
        FetchClient::with_transport(transport)
            .with_base_url(self.api_base.clone())
            .with_default_header("Accept", "application/json")
            .with_default_timeout(self.request_timeout())
    }
}
