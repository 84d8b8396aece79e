//! Default values for configuration types.

use crate::config::types::Config;

/// Backend used when no config sets `api.base_url`.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Request timeout used when no config sets `api.timeout_secs`.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the patient registration endpoint, relative to the base URL.
pub const PATIENTS_ENDPOINT_PATH: &str = "/api/patients/";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "PATIENTDESK_API_URL";

/// Name of the per-user and per-directory data directory.
pub const DESK_DIR_NAME: &str = ".patientdesk";

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const CREDENTIALS_FILE_NAME: &str = "storage.json";

impl Default for Config {
    fn default() -> Self {
        let desk_dir = match dirs::home_dir() {
            Some(home) => home.join(DESK_DIR_NAME),
            None => {
                tracing::warn!(
                    event = "core.config.home_dir_unavailable",
                    "Could not find home directory - using temp directory fallback"
                );
                std::env::temp_dir().join(DESK_DIR_NAME)
            }
        };

        Self { desk_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_dir_name() {
        let config = Config::default();
        assert!(config.desk_dir.ends_with(DESK_DIR_NAME));
        assert!(config.user_config_path().ends_with("config.toml"));
        assert!(config.credentials_path().ends_with("storage.json"));
    }
}
