//! Configuration type definitions for patientdesk.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000"
//! timeout_secs = 30
//!
//! [storage]
//! credentials_path = "/home/me/.patientdesk/storage.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults;

/// Runtime configuration derived from the environment, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for all patientdesk data (default: ~/.patientdesk)
    pub desk_dir: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the user-level config file.
    pub fn user_config_path(&self) -> PathBuf {
        self.desk_dir.join(defaults::CONFIG_FILE_NAME)
    }

    /// Default location of the persisted credential store.
    pub fn credentials_path(&self) -> PathBuf {
        self.desk_dir.join(defaults::CREDENTIALS_FILE_NAME)
    }
}

/// Main configuration loaded from TOML config files.
///
/// Every leaf is optional so that a project config only overrides the keys
/// it actually sets. Use the accessor methods to read resolved values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeskConfig {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Client-side persisted storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend, e.g. `http://127.0.0.1:8000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(defaults::DEFAULT_BASE_URL)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(defaults::DEFAULT_TIMEOUT_SECS)
    }
}

/// Client-side persisted storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// JSON key/value file holding the access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn credentials_path(&self) -> PathBuf {
        self.credentials_path
            .clone()
            .unwrap_or_else(|| Config::new().credentials_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desk_config_serialization() {
        let config = DeskConfig {
            api: ApiConfig {
                base_url: Some("https://clinic.example.org".to_string()),
                timeout_secs: Some(10),
            },
            storage: StorageConfig::default(),
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("base_url = \"https://clinic.example.org\""));
        assert!(toml_str.contains("timeout_secs = 10"));

        let parsed: DeskConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: DeskConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url(), "http://127.0.0.1:8000");
        assert_eq!(config.api.timeout_secs(), 30);
    }

    #[test]
    fn test_storage_config_deserialize() {
        let toml_str = r#"
[storage]
credentials_path = "/var/lib/desk/storage.json"
"#;
        let config: DeskConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.storage.credentials_path(),
            PathBuf::from("/var/lib/desk/storage.json")
        );
    }
}
