//! Store-specific error types and conversions.

use civic_core::error::CivicError;

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate issue id {0}")]
    DuplicateId(u64),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<StoreError> for CivicError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => CivicError::NotFound { entity, id },
            StoreError::DuplicateId(_) => CivicError::AlreadyExists {
                entity: "issue".into(),
            },
            other => CivicError::Storage(other.to_string()),
        }
    }
}
