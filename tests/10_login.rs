mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_returns_a_bearer_token() {
    let server = common::test_app();

    let token = common::login_token(&server.app).await;
    // Structurally a JWT: three dot-separated segments.
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let server = common::test_app();

    let response = common::post_json(
        &server.app,
        "/auth/login",
        json!({"username": "alice", "password": "wrong"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_user_and_wrong_password_get_identical_responses() {
    let server = common::test_app();

    let wrong_password = common::post_json(
        &server.app,
        "/auth/login",
        json!({"username": "alice", "password": "wrong"}),
    )
    .await;
    let unknown_user = common::post_json(
        &server.app,
        "/auth/login",
        json!({"username": "nobody", "password": "wrong"}),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let body_a = common::body_json(wrong_password).await;
    let body_b = common::body_json(unknown_user).await;
    assert_eq!(body_a, body_b, "login failures must be indistinguishable");
}

#[tokio::test]
async fn failed_login_body_does_not_leak_details() {
    let server = common::test_app();

    let response = common::post_json(
        &server.app,
        "/auth/login",
        json!({"username": "nobody", "password": "wrong"}),
    )
    .await;
    let body = common::body_json(response).await;

    let message = body["message"].as_str().unwrap_or_default().to_lowercase();
    assert!(!message.contains("user"));
    assert!(!message.contains("password"));
}
