use std::fmt;

use crate::patients::{ApiError, RegisteredPatient};

/// Severity of a notice, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Blocking message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Patient registered; shows the generated credentials.
    Registered { username: String, password: String },
    /// Registration request failed.
    AddFailed(ApiError),
    /// Search submitted with an empty username.
    MissingUsername,
}

impl Notice {
    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::Registered { .. } => NoticeKind::Success,
            Notice::MissingUsername => NoticeKind::Warning,
            Notice::AddFailed(_) => NoticeKind::Error,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notice::Registered { .. } => "Patient registered",
            Notice::AddFailed(_) => "Registration failed",
            Notice::MissingUsername => "Username required",
        }
    }
}

impl From<RegisteredPatient> for Notice {
    fn from(patient: RegisteredPatient) -> Self {
        Notice::Registered {
            username: patient.username,
            password: patient.password,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Registered { username, password } => write!(
                f,
                "Patient registered!\nUsername: {username}\nPassword: {password}"
            ),
            Notice::AddFailed(error) => write!(f, "Error adding patient: {error}"),
            Notice::MissingUsername => f.write_str("Please enter a username"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_message() {
        let notice = Notice::Registered {
            username: "u1".to_string(),
            password: "p1".to_string(),
        };
        assert_eq!(
            notice.to_string(),
            "Patient registered!\nUsername: u1\nPassword: p1"
        );
        assert_eq!(notice.kind(), NoticeKind::Success);
    }

    #[test]
    fn test_add_failed_message_uses_detail() {
        let notice = Notice::AddFailed(ApiError::from_response(
            400,
            r#"{"age":["A valid integer is required."]}"#,
        ));
        assert_eq!(
            notice.to_string(),
            r#"Error adding patient: {"age":["A valid integer is required."]}"#
        );
        assert_eq!(notice.kind(), NoticeKind::Error);
    }

    #[test]
    fn test_missing_username_message() {
        assert_eq!(
            Notice::MissingUsername.to_string(),
            "Please enter a username"
        );
        assert_eq!(Notice::MissingUsername.kind(), NoticeKind::Warning);
    }
}
