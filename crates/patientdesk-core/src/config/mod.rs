//! # Configuration System
//!
//! Hierarchical TOML configuration for patientdesk.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.patientdesk/config.toml` (global user preferences)
//! 3. **Project config** - `./.patientdesk/config.toml` (directory-specific overrides)
//! 4. **Environment** - `PATIENTDESK_API_URL` (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.patientdesk/config.toml
//! [api]
//! base_url = "https://clinic.example.org"
//! timeout_secs = 15
//!
//! [storage]
//! credentials_path = "/home/me/.patientdesk/storage.json"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use patientdesk_core::config::DeskConfig;
//!
//! fn example() -> Result<(), patientdesk_core::errors::ConfigError> {
//!     let config = DeskConfig::load_hierarchy()?;
//!     println!("registering patients at {}", config.patients_endpoint());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ApiConfig, Config, DeskConfig, StorageConfig};
pub use validation::validate_config;

use crate::errors::ConfigError;

impl DeskConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Full URL of the patient registration endpoint.
    pub fn patients_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url().trim_end_matches('/'),
            defaults::PATIENTS_ENDPOINT_PATH
        )
    }
}
