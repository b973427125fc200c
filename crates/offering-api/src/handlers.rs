//! API request handlers

use axum::{extract::State, http::StatusCode, Json};
use offering_service::{OfferingRequest, OfferingService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::{ApiError, ApiResult};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The offering coordinator
    pub offering: Arc<dyn OfferingService>,
}

impl AppState {
    /// Create new application state
    pub fn new(offering: Arc<dyn OfferingService>) -> Self {
        Self { offering }
    }
}

/// Create an offering (asset + policy definition + contract definition)
///
/// Returns 204 on success; 400 naming the missing or malformed part of
/// the request; 500 when persistence failed (after compensation).
#[instrument(skip(state, request))]
pub async fn create_offering(
    State(state): State<AppState>,
    Json(request): Json<OfferingRequest>,
) -> ApiResult<StatusCode> {
    debug!("received create offering request");

    state
        .offering
        .create(request)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update an offering; each sub-request present is upserted independently
#[instrument(skip(state, request))]
pub async fn update_offering(
    State(state): State<AppState>,
    Json(request): Json<OfferingRequest>,
) -> ApiResult<StatusCode> {
    debug!("received update offering request");

    state
        .offering
        .update(request)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Health check body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
}

/// Get API version information
pub async fn version_info() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        api_version: "v1".to_string(),
    })
}

/// Version information
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Crate version
    pub version: String,

    /// API version
    pub api_version: String,
}
