//! Health check and fallback handlers.

use axum::{extract::State, http::Uri, Json};
use serde::Serialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    /// Number of wines loaded.
    pub wines: usize,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "vinoteca".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        wines: state.dataset.len(),
    })
}

/// Any route not matched above.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
