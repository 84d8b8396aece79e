//! patientdesk-core: Core library for the patient-management landing page
//!
//! This library holds everything the landing page does that is not drawing:
//! the launcher state machine, patient registration against the backend,
//! the credential store and client-side routing. The GPUI frontend drives it.
//!
//! # Main Entry Points
//!
//! - [`launcher`] - Modal state, add form, search query and their operations
//! - [`patients`] - Form model, registration payload, HTTP client
//! - [`credentials`] - Persisted key/value store holding the access token
//! - [`navigation`] - Routes and the navigator capability
//! - [`config`] - Configuration management

pub mod config;
pub mod credentials;
pub mod errors;
pub mod events;
pub mod launcher;
pub mod logging;
pub mod navigation;
pub mod patients;

// Re-export commonly used types at crate root for convenience
pub use config::DeskConfig;
pub use credentials::{ACCESS_TOKEN_KEY, CredentialStore, FileCredentialStore};
pub use errors::DeskError;
pub use launcher::{ActiveModal, Launcher, Notice, NoticeKind};
pub use navigation::{Navigator, Route, Router};
pub use patients::{
    ApiError, FormField, GENDER_OPTIONS, HttpPatientApi, PatientApi, PatientForm,
    RegisteredPatient, RegistrationPayload,
};

// Re-export logging initialization
pub use logging::init_logging;
