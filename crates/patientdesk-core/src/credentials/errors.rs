use crate::errors::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Failed to read credential store '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Credential store '{path}' is corrupted: {message}")]
    Corrupted { path: String, message: String },

    #[error("Failed to save credential store: {message}")]
    SaveFailed { message: String },
}

impl DeskError for CredentialError {
    fn error_code(&self) -> &'static str {
        match self {
            CredentialError::ReadFailed { .. } => "CREDENTIALS_READ_FAILED",
            CredentialError::Corrupted { .. } => "CREDENTIALS_CORRUPTED",
            CredentialError::SaveFailed { .. } => "CREDENTIALS_SAVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, CredentialError::Corrupted { .. })
    }
}
