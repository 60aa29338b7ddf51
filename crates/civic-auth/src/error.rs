//! Authentication error types.

use civic_core::error::CivicError;
use thiserror::Error;

/// Message shown when registration fails without a server explanation.
pub const REGISTRATION_FAILED: &str = "Registration failed";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please fill in all required fields")]
    MissingFields,

    /// The server answered with an error; the payload is kept verbatim.
    #[error("{0}")]
    RegistrationRejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<AuthError> for CivicError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFields => CivicError::Validation {
                message: err.to_string(),
            },
            AuthError::RegistrationRejected(message) => CivicError::Registration(message),
            AuthError::Transport(_) => CivicError::Registration(REGISTRATION_FAILED.into()),
        }
    }
}
