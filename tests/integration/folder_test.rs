//! Integration tests for folder operations.

mod helpers;

use http::StatusCode;
use serde_json::json;

use folderhub_core::config::AppConfig;
use folderhub_core::types::FolderId;

#[tokio::test]
async fn test_create_root_folder() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/folders/",
            Some(json!({ "name": "Projects", "description": "All projects" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Projects");
    assert_eq!(response.body["description"], "All projects");
    assert!(response.body["parentId"].is_null());
    assert!(response.body["id"].as_str().unwrap().parse::<FolderId>().is_ok());
    assert!(response.body.get("createdAt").is_some());
    assert!(response.body.get("updatedAt").is_some());
}

#[tokio::test]
async fn test_create_rejects_bad_names() {
    let app = helpers::TestApp::new().await;

    for body in [
        json!({ "name": "" }),
        json!({ "name": "   " }),
        json!({ "name": "x".repeat(256) }),
        json!({ "description": "no name" }),
    ] {
        let response = app.request("POST", "/folders", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.code(), "VALIDATION_ERROR");
    }

    let response = app.request("GET", "/folders", None).await;
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let app = helpers::TestApp::new().await;

    let response = app.request_raw("POST", "/folders", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_under_missing_parent() {
    let app = helpers::TestApp::new().await;

    for parent in [FolderId::new().to_string(), "not-a-uuid".to_string()] {
        let response = app
            .request(
                "POST",
                "/folders",
                Some(json!({ "name": "orphan", "parentId": parent })),
            )
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.code(), "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_list_roots_with_child_counts() {
    let app = helpers::TestApp::new().await;
    let a = app.create_folder("A", None).await;
    app.create_folder("B", None).await;
    app.create_folder("A1", Some(&a)).await;
    app.create_folder("A2", Some(&a)).await;

    let response = app.request("GET", "/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let roots = response.body.as_array().unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0]["name"], "A");
    assert_eq!(roots[0]["childCount"], 2);
    assert_eq!(roots[1]["name"], "B");
    assert_eq!(roots[1]["childCount"], 0);
}

#[tokio::test]
async fn test_list_subfolders() {
    let app = helpers::TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let x = app.create_folder("x", Some(&a)).await;
    app.create_folder("y", Some(&a)).await;
    app.create_folder("deep", Some(&x)).await;

    let response = app
        .request("GET", &format!("/folders/{a}/subfolders"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let children = response.body.as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["id"], x.as_str());
    assert_eq!(children[0]["parentId"], a.as_str());
    assert_eq!(children[0]["childCount"], 1);
    assert_eq!(children[1]["name"], "y");
}

#[tokio::test]
async fn test_list_subfolders_of_unknown_id_is_empty() {
    let app = helpers::TestApp::new().await;

    for id in [FolderId::new().to_string(), "garbage".to_string()] {
        let response = app
            .request("GET", &format!("/folders/{id}/subfolders"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!([]));
    }
}

#[tokio::test]
async fn test_update_folder() {
    let app = helpers::TestApp::new().await;
    let id = app.create_folder("Old", None).await;
    let path = format!("/folders/{id}");

    let response = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "name": "New", "description": "notes" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "New");
    assert_eq!(response.body["description"], "notes");

    let response = app
        .request("PATCH", &path, Some(json!({ "name": "Newer" })))
        .await;
    assert_eq!(response.body["name"], "Newer");
    assert_eq!(response.body["description"], "notes");

    let response = app
        .request("PATCH", &path, Some(json!({ "description": null })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Newer");
    assert!(response.body["description"].is_null());
}

#[tokio::test]
async fn test_update_errors() {
    let app = helpers::TestApp::new().await;
    let id = app.create_folder("Keep", None).await;

    let response = app
        .request("PATCH", &format!("/folders/{id}"), Some(json!({ "name": "" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.code(), "VALIDATION_ERROR");

    for missing in [FolderId::new().to_string(), "nope".to_string()] {
        let response = app
            .request(
                "PATCH",
                &format!("/folders/{missing}"),
                Some(json!({ "name": "x" })),
            )
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_tree() {
    let app = helpers::TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", Some(&a)).await;
    let c = app.create_folder("C", Some(&b)).await;
    let d = app.create_folder("D", Some(&a)).await;

    let response = app.request("GET", &format!("/folders/{a}/tree"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    let tree = &response.body;
    assert_eq!(tree["id"], a.as_str());
    assert_eq!(tree["children"][0]["id"], b.as_str());
    assert_eq!(tree["children"][0]["children"][0]["id"], c.as_str());
    assert_eq!(tree["children"][0]["children"][0]["children"], json!([]));
    assert_eq!(tree["children"][1]["id"], d.as_str());
    assert_eq!(tree["children"][1]["children"], json!([]));
}

#[tokio::test]
async fn test_tree_of_unknown_id() {
    let app = helpers::TestApp::new().await;

    for id in [FolderId::new().to_string(), "123".to_string()] {
        let response = app.request("GET", &format!("/folders/{id}/tree"), None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.code(), "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_guarded_delete() {
    let app = helpers::TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", Some(&a)).await;

    let response = app.request("DELETE", &format!("/folders/{a}"), None).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.code(), "HAS_CHILDREN");
    assert_eq!(
        response.body["message"],
        "Folder has subfolders. Use force=true to delete."
    );

    // Anything but the literal `true` keeps the guard.
    let response = app
        .request("DELETE", &format!("/folders/{a}?force=1"), None)
        .await;
    assert_eq!(response.code(), "HAS_CHILDREN");

    let response = app.request("DELETE", &format!("/folders/{b}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Folder deleted");
    assert_eq!(response.body["deleted"], 1);

    let response = app.request("DELETE", &format!("/folders/{a}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_cascade_delete_scenario() {
    let app = helpers::TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", Some(&a)).await;
    let c = app.create_folder("C", Some(&b)).await;
    let other = app.create_folder("Other", None).await;

    let response = app.request("DELETE", &format!("/folders/{b}"), None).await;
    assert_eq!(response.code(), "HAS_CHILDREN");

    let response = app
        .request("DELETE", &format!("/folders/{a}?force=true"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Folder and all subfolders deleted");
    assert_eq!(response.body["deleted"], 3);

    for id in [&a, &b, &c] {
        let response = app.request("GET", &format!("/folders/{id}/tree"), None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);

        let response = app
            .request("GET", &format!("/folders/{id}/subfolders"), None)
            .await;
        assert_eq!(response.body, json!([]));
    }

    let response = app.request("GET", "/folders", None).await;
    let roots = response.body.as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["id"], other.as_str());
}

#[tokio::test]
async fn test_delete_unknown_id() {
    let app = helpers::TestApp::new().await;

    for path in [
        format!("/folders/{}", FolderId::new()),
        format!("/folders/{}?force=true", FolderId::new()),
        "/folders/not-a-uuid".to_string(),
    ] {
        let response = app.request("DELETE", &path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.code(), "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_depth_limit() {
    let mut config = AppConfig::default();
    config.hierarchy.max_depth = 1;
    let app = helpers::TestApp::with_config(config).await;

    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", Some(&a)).await;

    let response = app
        .request("POST", "/folders", Some(json!({ "name": "C", "parentId": b })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.code(), "VALIDATION_ERROR");
}
