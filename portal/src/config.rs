// portal/src/config.rs

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CONFIG_FILE: &str = "portal_config.yaml";
pub const STORAGE_FILE_NAME: &str = "local_storage.json";
pub const API_URL_ENV: &str = "CLINIC_API_URL";
pub const STORAGE_PATH_ENV: &str = "CLINIC_STORAGE_PATH";

/// Where the portal talks to and where it keeps its local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig { api_base_url: default_api_base_url(), storage_path: None }
    }
}

impl PortalConfig {
    /// Explicit `storage_path`, or `<config dir>/clinic-portal/local_storage.json`.
    pub fn resolved_storage_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("clinic-portal")
                .join(STORAGE_FILE_NAME)
        })
    }

    /// Applies `CLINIC_API_URL` / `CLINIC_STORAGE_PATH` on top of file values.
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                debug!("{} overrides api_base_url", API_URL_ENV);
                self.api_base_url = url;
            }
        }
        if let Ok(path) = env::var(STORAGE_PATH_ENV) {
            if !path.trim().is_empty() {
                debug!("{} overrides storage_path", STORAGE_PATH_ENV);
                self.storage_path = Some(PathBuf::from(path));
            }
        }
        self
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

// The file nests everything under a top-level `portal:` key.
#[derive(Debug, Deserialize)]
struct PortalConfigWrapper {
    portal: PortalConfig,
}

/// Parses a `portal:` YAML document.
pub fn parse_portal_config(content: &str) -> Result<PortalConfig> {
    let wrapper: PortalConfigWrapper = serde_yaml2::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse portal config YAML: {}", e))?;
    Ok(wrapper.portal)
}

/// Loads the portal configuration from `config_file_path` (or
/// `portal_config.yaml` in the working directory), falling back to defaults
/// when the file does not exist. `.env` and environment overrides are
/// applied last.
pub fn load_portal_config(config_file_path: Option<&Path>) -> Result<PortalConfig> {
    dotenv::dotenv().ok();

    let path_to_use = config_file_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let config = if path_to_use.exists() {
        info!("Loading portal config from {}", path_to_use.display());
        let content = fs::read_to_string(&path_to_use)
            .with_context(|| format!("Failed to read portal config file: {}", path_to_use.display()))?;
        parse_portal_config(&content)
            .with_context(|| format!("Invalid portal config file: {}", path_to_use.display()))?
    } else {
        if config_file_path.is_some() {
            warn!("Config file not found at {}. Using defaults.", path_to_use.display());
        }
        PortalConfig::default()
    };

    Ok(config.apply_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_nested_yaml() {
        let config = parse_portal_config(
            "portal:\n  api_base_url: \"http://clinic.local:8080\"\n  storage_path: \"/tmp/ls.json\"\n",
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://clinic.local:8080");
        assert_eq!(config.resolved_storage_path(), PathBuf::from("/tmp/ls.json"));
    }

    #[test]
    fn should_fill_missing_keys_with_defaults() {
        let config = parse_portal_config("portal:\n  storage_path: \"/tmp/ls.json\"\n").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn should_reject_document_without_portal_key() {
        assert!(parse_portal_config("server:\n  port: 1\n").is_err());
    }

    #[test]
    fn should_default_storage_under_config_dir() {
        let path = PortalConfig::default().resolved_storage_path();
        assert!(path.ends_with("clinic-portal/local_storage.json"));
    }
}
