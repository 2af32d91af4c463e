//! Route definitions for the FolderHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::Router;
use axum::routing::{get, patch};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route and the state attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(folder_routes())
        .merge(health_routes())
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Folder endpoints: list, create, update, delete, subfolders, tree
fn folder_routes() -> Router<AppState> {
    use handlers::folder;

    Router::new()
        .route(
            "/folders",
            get(folder::list_roots).post(folder::create_folder),
        )
        .route(
            "/folders/",
            get(folder::list_roots).post(folder::create_folder),
        )
        .route(
            "/folders/{id}",
            patch(folder::update_folder).delete(folder::delete_folder),
        )
        .route("/folders/{id}/subfolders", get(folder::list_subfolders))
        .route("/folders/{id}/tree", get(folder::get_tree))
}

/// Health endpoints: liveness and readiness
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::readiness))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use folderhub_core::config::AppConfig;
    use folderhub_database::StoreManager;
    use folderhub_database::repositories::MemoryFolderRepository;

    use super::*;

    fn router() -> Router {
        let store = StoreManager::from_store(Arc::new(MemoryFolderRepository::new()));
        build_router(AppState::new(AppConfig::default(), store))
    }

    #[tokio::test]
    async fn test_roots_with_and_without_trailing_slash() {
        for uri in ["/folders", "/folders/"] {
            let response = router()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&bytes[..], b"[]");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let response = router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "NOT_FOUND");
    }
}
