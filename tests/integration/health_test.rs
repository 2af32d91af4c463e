//! Integration tests for health endpoints.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_liveness() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["timestamp"].is_string());
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_readiness_reports_store() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health/ready", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.code(), "NOT_FOUND");
}
