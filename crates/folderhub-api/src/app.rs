//! Application builder: wires router, middleware, and state into an Axum app.

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware as axum_middleware;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Requests exceeding `server.request_timeout_seconds` are aborted with 408;
/// the handler future is dropped, which rolls back any open store
/// transaction. A timeout of 0 leaves requests unbounded.
pub fn build_app(state: AppState) -> Router {
    let timeout_secs = state.config.server.request_timeout_seconds;
    let cors = build_cors_layer(&state.config.server.cors);

    let router = build_router(state);
    let router = if timeout_secs > 0 {
        router.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(timeout_secs),
        ))
    } else {
        router
    };

    // Logging wraps the timeout so aborted requests are still recorded.
    router
        .layer(axum_middleware::from_fn(request_logging))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
