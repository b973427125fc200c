//! Service-layer error types

use offering_store::StoreError;
use thiserror::Error;

/// Result type alias for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Errors surfaced by the offering coordinator
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A required sub-request was absent on the create path.
    /// Raised before any store is touched.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// A sub-request failed transform-stage validation.
    /// Raised before any store is touched on the create path.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A store call failed. On the create path this is surfaced after
    /// best-effort compensation has been attempted.
    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl ServiceError {
    /// Whether the caller is at fault (maps to a 4xx at the boundary)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::MissingField { .. } | ServiceError::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = ServiceError::MissingField { field: "assetEntry" };
        assert_eq!(err.to_string(), "Missing required field: assetEntry");
        assert!(err.is_client_error());
    }

    #[test]
    fn persistence_wraps_store_error() {
        let err: ServiceError = StoreError::AlreadyExists("a1".to_string()).into();
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("a1"));
    }
}
