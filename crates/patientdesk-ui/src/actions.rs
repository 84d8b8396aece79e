//! Business logic handlers for patientdesk-ui.
//!
//! Thin wrappers over patientdesk-core that add UI-level logging. They may
//! block and are run on the background executor.

use patientdesk_core::{ApiError, PatientApi, RegisteredPatient, RegistrationPayload};

/// Post a registration request.
pub fn register_patient(
    api: &dyn PatientApi,
    payload: &RegistrationPayload,
    access_token: Option<&str>,
) -> Result<RegisteredPatient, ApiError> {
    tracing::info!(
        event = "ui.register_patient.started",
        authenticated = access_token.is_some()
    );

    match api.register_patient(payload, access_token) {
        Ok(patient) => {
            tracing::info!(
                event = "ui.register_patient.completed",
                username = %patient.username
            );
            Ok(patient)
        }
        Err(e) => {
            tracing::error!(
                event = "ui.register_patient.failed",
                status = ?e.status,
                error = %e
            );
            Err(e)
        }
    }
}

/// Stand-in used when the HTTP client could not be built at startup.
///
/// Every registration fails with the startup reason, so the window still
/// opens and the Add form reports the problem.
pub struct UnavailableApi {
    reason: String,
}

impl UnavailableApi {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PatientApi for UnavailableApi {
    fn register_patient(
        &self,
        _payload: &RegistrationPayload,
        _access_token: Option<&str>,
    ) -> Result<RegisteredPatient, ApiError> {
        Err(ApiError::transport(self.reason.clone()))
    }
}
