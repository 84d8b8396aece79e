//! Application lifecycle events shared by every frontend.

use tracing::{error, info};

use crate::config::DeskConfig;

pub fn log_app_startup(config: &DeskConfig) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        endpoint = %config.patients_endpoint(),
        credentials_path = %config.storage.credentials_path().display()
    );
}

/// Config could not be loaded; the app keeps running on defaults.
pub fn log_config_fallback(error: &dyn std::error::Error) {
    error!(
        event = "core.app.config_fallback",
        error = %error,
        "Using default configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_events() {
        // Event functions must not panic without a subscriber installed
        log_app_startup(&DeskConfig::default());

        let test_error = std::io::Error::other("test");
        log_config_fallback(&test_error);
    }
}
