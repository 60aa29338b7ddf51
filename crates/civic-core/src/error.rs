//! Error types for the civic reporting system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CivicError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Authorization denied: {reason}")]
    AuthorizationDenied { reason: String },

    #[error("{message}")]
    Validation { message: String },

    /// Server-provided registration failure, surfaced verbatim.
    #[error("{0}")]
    Registration(String),

    #[error("Geolocation failed: {0}")]
    Geolocation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CivicError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.to_owned(),
            id: id.to_string(),
        }
    }
}

pub type CivicResult<T> = Result<T, CivicError>;
