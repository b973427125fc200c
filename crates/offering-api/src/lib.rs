//! HTTP boundary for the offering registry
//!
//! A thin axum layer over the offering service: request bodies deserialize
//! into the service DTOs, service errors map to status codes. Validation
//! errors are the caller's fault (400); persistence failures are server
//! errors (500) surfaced after compensation has been attempted.

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use handlers::AppState;
pub use routes::build_router;
