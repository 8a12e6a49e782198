// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use cats_api::database::models::UserRecord;
use cats_api::routes;
use cats_api::state::AppState;
use cats_api::testing::{lazy_pool, test_security, MemoryUserStore};

pub struct TestApp {
    pub app: Router,
    pub alice: UserRecord,
}

/// Full application router backed by an in-memory user store seeded with
/// alice/correct and a fixed signing secret.
pub fn test_app() -> TestApp {
    let store = MemoryUserStore::new();
    let alice = store.insert_user("alice", "correct");

    let state = AppState {
        pool: lazy_pool(),
        users: Arc::new(store),
        security: test_security(),
    };

    TestApp {
        app: routes::app(state),
        alice,
    }
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    app.clone().oneshot(request).await.expect("response")
}

pub async fn get(app: &Router, uri: &str, bearer: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).expect("request");
    app.clone().oneshot(request).await.expect("response")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Login as the seeded user and return the bearer token.
pub async fn login_token(app: &Router) -> String {
    let response = post_json(
        app,
        "/auth/login",
        serde_json::json!({"username": "alice", "password": "correct"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["accessToken"]
        .as_str()
        .expect("accessToken in login response")
        .to_string()
}
