//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use folderhub_api::{AppState, build_app};
use folderhub_core::config::AppConfig;
use folderhub_database::StoreManager;
use folderhub_database::repositories::MemoryFolderRepository;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    /// Create a test application with custom configuration
    pub async fn with_config(mut config: AppConfig) -> Self {
        config.database.provider = "memory".to_string();

        let store = StoreManager::from_store(Arc::new(MemoryFolderRepository::new()));
        let router = build_app(AppState::new(config.clone(), store));

        Self { router, config }
    }

    /// Make an HTTP request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.request_raw(method, path, &body_str).await
    }

    /// Make an HTTP request with a raw body
    pub async fn request_raw(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_owned()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a folder and return its ID
    pub async fn create_folder(&self, name: &str, parent_id: Option<&str>) -> String {
        let mut body = json!({ "name": name });
        if let Some(parent_id) = parent_id {
            body["parentId"] = json!(parent_id);
        }

        let response = self.request("POST", "/folders", Some(body)).await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );

        response.body["id"]
            .as_str()
            .expect("No id in create response")
            .to_string()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Error code from the `{code, message}` envelope
    pub fn code(&self) -> &str {
        self.body["code"].as_str().unwrap_or_default()
    }
}
