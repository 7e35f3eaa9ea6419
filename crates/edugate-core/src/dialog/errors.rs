use std::fmt;

use crate::api::TransportError;

/// Local, pre-network validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidCaptcha,
}

/// Why a submit did not log the user in.
///
/// `Display` is the message shown inline in the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    Validation(ValidationError),
    /// Server rejected the credentials or answered with an unexpected role.
    Auth { message: String },
    /// Transport failure or unparseable reply.
    Network(TransportError),
    /// The session record could not be written.
    Storage { detail: String },
    /// Submit without a selected login category.
    State,
}

impl LoginError {
    /// Whether this failure forces a fresh CAPTCHA.
    pub fn resets_captcha(&self) -> bool {
        !matches!(
            self,
            LoginError::State | LoginError::Validation(ValidationError::MissingFields)
        )
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::Validation(ValidationError::MissingFields) => {
                write!(f, "Please fill all fields")
            }
            LoginError::Validation(ValidationError::InvalidCaptcha) => write!(f, "Invalid CAPTCHA"),
            LoginError::Auth { message } => write!(f, "{message}"),
            LoginError::Network(_) => write!(f, "Network error. Please try again."),
            LoginError::Storage { .. } => {
                write!(f, "Could not save your session. Please try again.")
            }
            LoginError::State => write!(f, "Please select a login type"),
        }
    }
}

impl std::error::Error for LoginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoginError::Network(e) => Some(e),
            _ => None,
        }
    }
}
