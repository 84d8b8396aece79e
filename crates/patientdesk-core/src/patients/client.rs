use std::time::Duration;

use crate::config::DeskConfig;
use crate::errors::DeskError;

use super::errors::{ApiError, parse_detail};
use super::types::{RegisteredPatient, RegistrationPayload};

/// Backend operations the launcher depends on.
pub trait PatientApi: Send + Sync {
    /// Register a patient. `access_token` is sent as a bearer token when present.
    fn register_patient(
        &self,
        payload: &RegistrationPayload,
        access_token: Option<&str>,
    ) -> Result<RegisteredPatient, ApiError>;
}

/// Blocking HTTP implementation of [`PatientApi`].
///
/// Calls block the current thread; the UI runs them on a background executor.
pub struct HttpPatientApi {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpPatientApi {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &DeskConfig) -> Result<Self, ApiError> {
        Self::new(
            config.patients_endpoint(),
            Duration::from_secs(config.api.timeout_secs()),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PatientApi for HttpPatientApi {
    fn register_patient(
        &self,
        payload: &RegistrationPayload,
        access_token: Option<&str>,
    ) -> Result<RegisteredPatient, ApiError> {
        tracing::info!(
            event = "core.patients.register_started",
            endpoint = %self.endpoint,
            authenticated = access_token.is_some()
        );

        let mut request = self.client.post(&self.endpoint).json(payload);
        match access_token {
            Some(token) => request = request.bearer_auth(token),
            None => tracing::warn!(
                event = "core.patients.access_token_missing",
                "No access token in credential store - sending unauthenticated request"
            ),
        }

        let response = request.send().map_err(|e| {
            tracing::error!(event = "core.patients.register_failed", error = %e);
            ApiError::transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            tracing::error!(
                event = "core.patients.response_read_failed",
                status = status,
                error = %e
            );
            ApiError::transport(e.to_string())
        })?;

        let result = interpret_response(status, &body);
        match &result {
            Ok(patient) => tracing::info!(
                event = "core.patients.register_completed",
                username = %patient.username
            ),
            Err(e) => tracing::warn!(
                event = "core.patients.register_rejected",
                status = status,
                error_code = e.error_code(),
                detail = %e
            ),
        }
        result
    }
}

/// Turn a registration response into a result.
///
/// Only `201 Created` with a body carrying `username` and `password`
/// counts as success.
pub fn interpret_response(status: u16, body: &str) -> Result<RegisteredPatient, ApiError> {
    if status != 201 {
        return Err(ApiError::from_response(status, body));
    }

    serde_json::from_str(body).map_err(|e| ApiError {
        status: Some(status),
        server_detail: parse_detail(body),
        raw_message: format!("Invalid registration response: {e}"),
    })
}
