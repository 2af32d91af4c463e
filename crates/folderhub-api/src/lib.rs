//! # folderhub-api
//!
//! HTTP API layer for FolderHub built on Axum.
//!
//! Provides the folder and health endpoints, middleware (CORS, request
//! logging, timeouts), extractors, DTOs, and the mapping from
//! [`AppError`](folderhub_core::AppError) kinds to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
