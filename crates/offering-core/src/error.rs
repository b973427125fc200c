//! Error types for the offering domain

use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;

/// Errors raised while constructing or validating domain entities
#[derive(Error, Debug)]
pub enum DomainError {
    /// Entity failed structural validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
