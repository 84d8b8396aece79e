use crate::errors::DeskError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Unknown form field '{name}'")]
    UnknownField { name: String },
}

impl DeskError for FormError {
    fn error_code(&self) -> &'static str {
        match self {
            FormError::UnknownField { .. } => "FORM_UNKNOWN_FIELD",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// Failure of a registration request.
///
/// `server_detail` holds whatever body the backend sent back (parsed as JSON
/// when possible); `raw_message` always describes the failure itself.
/// Display prefers the server detail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", describe(.server_detail, .raw_message))]
pub struct ApiError {
    /// HTTP status, `None` when no response was received.
    pub status: Option<u16>,
    pub server_detail: Option<serde_json::Value>,
    pub raw_message: String,
}

impl ApiError {
    /// Failure before any response arrived (connect, timeout, TLS, body read).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            server_detail: None,
            raw_message: message.into(),
        }
    }

    /// Non-success response. The body becomes the server detail: JSON when
    /// it parses, otherwise the trimmed text; an empty body gives none.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self {
            status: Some(status),
            server_detail: parse_detail(body),
            raw_message: format!("Request failed with status code {status}"),
        }
    }

    /// Message shown to the user: server detail when present, else the raw message.
    pub fn detail(&self) -> String {
        describe(&self.server_detail, &self.raw_message)
    }
}

pub(crate) fn parse_detail(body: &str) -> Option<serde_json::Value> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    Some(
        serde_json::from_str(body)
            .unwrap_or_else(|_| serde_json::Value::String(body.to_string())),
    )
}

fn describe(server_detail: &Option<serde_json::Value>, raw_message: &str) -> String {
    match server_detail {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
        None => raw_message.to_string(),
    }
}

impl DeskError for ApiError {
    fn error_code(&self) -> &'static str {
        match self.status {
            None => "API_TRANSPORT_ERROR",
            Some(400..=499) => "API_REQUEST_REJECTED",
            Some(500..=599) => "API_SERVER_ERROR",
            Some(_) => "API_UNEXPECTED_RESPONSE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self.status, Some(400..=499))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_detail_preferred_over_raw_message() {
        let error = ApiError::from_response(400, r#"{"email": ["Enter a valid email address."]}"#);
        assert_eq!(error.status, Some(400));
        assert_eq!(
            error.server_detail,
            Some(json!({"email": ["Enter a valid email address."]}))
        );
        assert_eq!(
            error.to_string(),
            r#"{"email":["Enter a valid email address."]}"#
        );
        assert_eq!(error.error_code(), "API_REQUEST_REJECTED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_plain_text_body_is_shown_verbatim() {
        let error = ApiError::from_response(502, "  Bad Gateway\n");
        assert_eq!(error.detail(), "Bad Gateway");
        assert_eq!(error.error_code(), "API_SERVER_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_empty_body_falls_back_to_raw_message() {
        let error = ApiError::from_response(500, "");
        assert_eq!(error.server_detail, None);
        assert_eq!(error.detail(), "Request failed with status code 500");
    }

    #[test]
    fn test_transport_error() {
        let error = ApiError::transport("error sending request: connection refused");
        assert_eq!(error.status, None);
        assert_eq!(error.detail(), "error sending request: connection refused");
        assert_eq!(error.error_code(), "API_TRANSPORT_ERROR");
    }

    #[test]
    fn test_unknown_field_error() {
        let error = FormError::UnknownField {
            name: "phone".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown form field 'phone'");
        assert_eq!(error.error_code(), "FORM_UNKNOWN_FIELD");
    }
}
