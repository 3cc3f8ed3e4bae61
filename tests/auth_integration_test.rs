//! Integration tests for registration, login, and session lookup

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_returns_token() {
    let app = common::TestApp::new().await;

    let body = json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": format!("register_{}@example.com", uuid::Uuid::new_v4()),
        "password": "secret123"
    });

    let (status, response) = app.post("/api/users", None, &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!response["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email_rejected() {
    let app = common::TestApp::new().await;

    let body = json!({
        "firstName": "Dup",
        "lastName": "User",
        "email": format!("duplicate_{}@example.com", uuid::Uuid::new_v4()),
        "password": "secret123"
    });

    let (status, _) = app.post("/api/users", None, &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    // Second registration with the same email fails with 400 and creates
    // no second identity
    let (status, response) = app.post("/api/users", None, &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["errors"][0]["msg"], "User already exists");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(body["email"].as_str().unwrap())
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_validation_failures() {
    let app = common::TestApp::new().await;

    let cases = [
        json!({"firstName": "", "lastName": "User", "email": "a@example.com", "password": "secret123"}),
        json!({"firstName": "Test", "lastName": "", "email": "a@example.com", "password": "secret123"}),
        json!({"firstName": "Test", "lastName": "User", "email": "not-an-email", "password": "secret123"}),
        json!({"firstName": "Test", "lastName": "User", "email": "a@example.com", "password": "short"}),
    ];

    for case in cases {
        let (status, response) = app.post("/api/users", None, &case.to_string()).await;
        assert_eq!(
            status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "expected 422 for {case}"
        );
        assert!(response["errors"][0]["msg"].is_string());
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_success() {
    let app = common::TestApp::new().await;

    let email = format!("login_{}@example.com", uuid::Uuid::new_v4());
    let register = json!({
        "firstName": "Log",
        "lastName": "In",
        "email": email,
        "password": "secret123"
    });
    app.post("/api/users", None, &register.to_string()).await;

    let login = json!({ "email": email, "password": "secret123" });
    let (status, response) = app.post("/api/login", None, &login.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!response["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_failure_is_uniform() {
    let app = common::TestApp::new().await;

    let email = format!("uniform_{}@example.com", uuid::Uuid::new_v4());
    let register = json!({
        "firstName": "Uni",
        "lastName": "Form",
        "email": email,
        "password": "secret123"
    });
    app.post("/api/users", None, &register.to_string()).await;

    // Wrong password for an existing user
    let wrong_password = json!({ "email": email, "password": "wrong-password" });
    let (status_a, body_a) = app.post("/api/login", None, &wrong_password.to_string()).await;

    // Unknown email entirely
    let unknown_email = json!({
        "email": format!("nobody_{}@example.com", uuid::Uuid::new_v4()),
        "password": "secret123"
    });
    let (status_b, body_b) = app.post("/api/login", None, &unknown_email.to_string()).await;

    // Identical status and body: no user enumeration
    assert_eq!(status_a, StatusCode::BAD_REQUEST);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a, body_b);
    assert_eq!(body_a["errors"][0]["msg"], "Invalid email or password");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_then_auth_roundtrip() {
    let app = common::TestApp::new().await;

    let email = format!("roundtrip_{}@example.com", uuid::Uuid::new_v4());
    let register = json!({
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": email,
        "password": "secret123"
    });
    let (_, response) = app.post("/api/users", None, &register.to_string()).await;
    let token = response["token"].as_str().unwrap();

    let (status, identity) = app.get("/api/auth", Some(token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(identity["firstName"], "Grace");
    assert_eq!(identity["email"], email);
    assert_eq!(identity["active"], true);
    assert_eq!(identity["role"], "other");
    // The password hash must never leave the boundary
    assert!(identity.get("passwordHash").is_none());
    assert!(identity.get("password_hash").is_none());

    // Omitting the header rejects before the handler runs
    let (status, body) = app.get("/api/auth", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["msg"], "No token, authorization denied");
}
