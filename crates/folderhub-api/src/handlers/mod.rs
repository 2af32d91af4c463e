//! HTTP request handlers.

pub mod folder;
pub mod health;

use folderhub_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
