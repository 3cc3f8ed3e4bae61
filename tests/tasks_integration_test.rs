//! Integration tests for task CRUD and ownership

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_task() {
    let app = common::TestApp::new().await;
    let token = app.register_user("task_create").await;

    let body = json!({ "description": "Call the inspector" });
    let (status, task) = app.post("/api/tasks", Some(&token), &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["description"], "Call the inspector");
    assert!(!task["createdUser"].as_str().unwrap().is_empty());
    assert!(task["completeDate"].is_null());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_task_requires_description() {
    let app = common::TestApp::new().await;
    let token = app.register_user("task_nodesc").await;

    let (status, response) = app
        .post("/api/tasks", Some(&token), &json!({}).to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["errors"][0]["msg"], "Task description is required");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_task_update_and_complete() {
    let app = common::TestApp::new().await;
    let token = app.register_user("task_patch").await;

    let (_, task) = app
        .post(
            "/api/tasks",
            Some(&token),
            &json!({"description": "Order materials"}).to_string(),
        )
        .await;
    let id = task["id"].as_str().unwrap();

    let patch = json!({ "completeDate": "2024-06-01T12:00:00Z" });
    let (status, updated) = app
        .put(&format!("/api/tasks/{id}"), Some(&token), &patch.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "Order materials");
    assert!(!updated["completeDate"].is_null());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_task_update_rejects_empty_description() {
    let app = common::TestApp::new().await;
    let token = app.register_user("task_blank_desc").await;

    let (_, task) = app
        .post(
            "/api/tasks",
            Some(&token),
            &json!({"description": "Still needed"}).to_string(),
        )
        .await;
    let id = task["id"].as_str().unwrap();

    // The description stays required on update, matching the create check
    let (status, body) = app
        .put(
            &format!("/api/tasks/{id}"),
            Some(&token),
            &json!({"description": ""}).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["msg"], "Task description is required");

    let (_, unchanged) = app.get(&format!("/api/tasks/{id}"), Some(&token)).await;
    assert_eq!(unchanged["description"], "Still needed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_task_ownership_enforced() {
    let app = common::TestApp::new().await;
    let owner_token = app.register_user("task_owner").await;
    let other_token = app.register_user("task_other").await;

    let (_, task) = app
        .post(
            "/api/tasks",
            Some(&owner_token),
            &json!({"description": "Private task"}).to_string(),
        )
        .await;
    let id = task["id"].as_str().unwrap();

    let (status, body) = app
        .delete(&format!("/api/tasks/{id}"), Some(&other_token))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["msg"], "User not authorized");

    let (status, body) = app
        .delete(&format!("/api/tasks/{id}"), Some(&owner_token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Task removed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_task_missing_is_404() {
    let app = common::TestApp::new().await;
    let token = app.register_user("task_missing").await;

    let (status, body) = app
        .get(&format!("/api/tasks/{}", uuid::Uuid::new_v4()), Some(&token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Task not found");
}
