//! Health check handlers.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use tracing::warn;

use folderhub_core::error::AppError;

use crate::dto::response::{HealthResponse, ReadinessResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/ready
pub async fn readiness(State(state): State<AppState>) -> Result<Json<ReadinessResponse>, ApiError> {
    let provider = state.store.provider_name();

    state.store.store().health_check().await.map_err(|e| {
        warn!(store = provider, error = %e, "Readiness check failed");
        AppError::service_unavailable(format!("Folder store '{provider}' is not reachable"))
    })?;

    Ok(Json(ReadinessResponse {
        status: "ok".to_string(),
        store: provider.to_string(),
        timestamp: Utc::now(),
    }))
}
