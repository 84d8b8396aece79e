//! Patient registration: the add-patient form, its wire payload, and the
//! HTTP client that posts it to the backend.

pub mod client;
pub mod errors;
pub mod form;
pub mod types;

pub use client::{HttpPatientApi, PatientApi, interpret_response};
pub use errors::{ApiError, FormError};
pub use form::{FormField, GENDER_OPTIONS, PatientForm};
pub use types::{RegisteredPatient, RegistrationPayload};
