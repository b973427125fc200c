//! Store-specific error types

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the given id already exists
    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    /// No record with the given id exists
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A backend constraint was violated
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The backend could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// Internal store error
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Check if this error is a duplicate/already exists error
    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AlreadyExists(_))
    }
}
