//! Configuration loading and merging logic.
//!
//! Loads configuration from files and merges the layers described in the
//! [module docs](super). Missing files are skipped; unreadable or malformed
//! files are errors.

use std::fs;
use std::path::Path;

use crate::config::defaults::{API_URL_ENV, CONFIG_FILE_NAME, DESK_DIR_NAME};
use crate::config::types::{ApiConfig, Config, DeskConfig, StorageConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.patientdesk/config.toml`)
/// 3. Project config (`./.patientdesk/config.toml`)
/// 4. `PATIENTDESK_API_URL`
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// or if the merged configuration fails validation.
pub fn load_hierarchy() -> Result<DeskConfig, ConfigError> {
    let user_path = Config::new().user_config_path();
    let project_path = std::env::current_dir()
        .map(|dir| dir.join(DESK_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok();

    let config = load_from_paths(Some(&user_path), project_path.as_deref())?;
    let config = apply_env_overrides(config, |key| std::env::var(key).ok());

    validate_config(&config)?;

    tracing::debug!(
        event = "core.config.loaded",
        base_url = config.api.base_url(),
        timeout_secs = config.api.timeout_secs()
    );

    Ok(config)
}

/// Merge the user and project layers found at the given paths onto defaults.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: Option<&Path>,
) -> Result<DeskConfig, ConfigError> {
    let mut config = DeskConfig::default();

    for path in [user_path, project_path].into_iter().flatten() {
        if let Some(layer) = load_config_file(path)? {
            config = merge_configs(config, layer);
        }
    }

    Ok(config)
}

/// Load a configuration file, returning `None` if it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<DeskConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: DeskConfig, override_config: DeskConfig) -> DeskConfig {
    DeskConfig {
        api: ApiConfig {
            base_url: override_config.api.base_url.or(base.api.base_url),
            timeout_secs: override_config.api.timeout_secs.or(base.api.timeout_secs),
        },
        storage: StorageConfig {
            credentials_path: override_config
                .storage
                .credentials_path
                .or(base.storage.credentials_path),
        },
    }
}

/// Apply environment overrides using the given variable lookup.
///
/// Empty values are ignored.
pub fn apply_env_overrides(
    mut config: DeskConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> DeskConfig {
    if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
        tracing::debug!(event = "core.config.env_override", key = API_URL_ENV, value = %url);
        config.api.base_url = Some(url.trim().to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let config = load_from_paths(Some(&missing), Some(&missing)).unwrap();
        assert_eq!(config, DeskConfig::default());
    }

    #[test]
    fn test_project_config_overrides_user_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let user = write_config(
            temp_dir.path(),
            "user.toml",
            "[api]\nbase_url = \"http://user:8000\"\ntimeout_secs = 12\n",
        );
        let project = write_config(
            temp_dir.path(),
            "project.toml",
            "[api]\nbase_url = \"http://project:9000\"\n",
        );

        let config = load_from_paths(Some(&user), Some(&project)).unwrap();
        assert_eq!(config.api.base_url(), "http://project:9000");
        // Not set by the project layer, so the user value survives
        assert_eq!(config.api.timeout_secs(), 12);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let user = write_config(temp_dir.path(), "user.toml", "invalid toml [[[");

        let result = load_from_paths(Some(&user), None);
        match result {
            Err(ConfigError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("user.toml"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_merge_keeps_base_when_override_empty() {
        let base = DeskConfig {
            api: ApiConfig {
                base_url: Some("http://base".to_string()),
                timeout_secs: Some(5),
            },
            storage: StorageConfig {
                credentials_path: Some(PathBuf::from("/base/storage.json")),
            },
        };

        let merged = merge_configs(base.clone(), DeskConfig::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_env_override_replaces_base_url() {
        let config = apply_env_overrides(DeskConfig::default(), |key| {
            (key == API_URL_ENV).then(|| " https://env.example.org ".to_string())
        });
        assert_eq!(config.api.base_url(), "https://env.example.org");
    }

    #[test]
    fn test_empty_env_override_is_ignored() {
        let config = apply_env_overrides(DeskConfig::default(), |_| Some("   ".to_string()));
        assert_eq!(config.api.base_url, None);
    }
}
