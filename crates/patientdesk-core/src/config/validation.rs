//! Configuration validation.

use crate::config::types::DeskConfig;
use crate::errors::ConfigError;

/// Validate the resolved configuration.
///
/// # Errors
///
/// - `InvalidBaseUrl` if the base URL is not an http(s) URL
/// - `InvalidConfiguration` if the timeout is zero
pub fn validate_config(config: &DeskConfig) -> Result<(), ConfigError> {
    let url = config.api.base_url();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl {
            url: url.to_string(),
        });
    }

    if config.api.timeout_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.timeout_secs must be greater than 0".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DeskConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let mut config = DeskConfig::default();
        config.api.base_url = Some("127.0.0.1:8000".to_string());

        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = DeskConfig::default();
        config.api.timeout_secs = Some(0);

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }
}
