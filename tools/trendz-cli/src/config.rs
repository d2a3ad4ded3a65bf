//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use product_details::WorkloadConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["trendz.toml", ".trendz.toml", "trendz.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Page configuration, shared with the edge workload.
    #[serde(default)]
    pub page: WorkloadConfig,

    /// Terminal-only settings.
    #[serde(default)]
    pub cli: CliSettings,
}

/// Settings only the CLI reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliSettings {
    /// File holding a `Cookie`-style header with the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_file: Option<PathBuf>,

    /// Ask for a token interactively when none is found.
    #[serde(default)]
    pub prompt_for_token: bool,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// Whether `path` names a JSON config file.
pub fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default trendz.toml config file.
pub fn generate_default_config() -> String {
    r#"# Nxt Trendz product page configuration

[page]
api_base = "https://apis.ccbp.in"
credential_key = "jwt_token"
# request_timeout_ms = 10000
# "latest_issued" ignores responses to superseded requests;
# "last_resolved" applies whichever response arrives last.
resolution_policy = "latest_issued"
log_level = "info"
log_format = "json"

[cli]
# cookie_file = "cookies.txt"
prompt_for_token = false
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use trendz_core::ResolutionPolicy;

    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
[page]
resolution_policy = "last_resolved"

[cli]
cookie_file = "jar.txt"
"#,
        )
        .unwrap();

        assert_eq!(config.page.resolution_policy, ResolutionPolicy::LastResolved);
        assert_eq!(config.page.api_base, "https://apis.ccbp.in");
        assert_eq!(config.cli.cookie_file, Some(PathBuf::from("jar.txt")));
        assert!(!config.cli.prompt_for_token);
    }

    #[test]
    fn test_save_and_load_json() {
        let path = std::env::temp_dir().join(format!("trendz-config-{}.json", std::process::id()));
        let mut config = CliConfig::default();
        config.page.request_timeout_ms = Some(2500);

        config.save(&path).unwrap();
        let loaded = CliConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = CliConfig::load("/nonexistent/trendz.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/trendz.toml"));
    }
}
