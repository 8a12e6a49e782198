use std::sync::Arc;

use axum::{
    extract::State,
    http::Method,
    middleware,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::{require_bearer_auth, Guard, RoutePolicy};
use crate::state::AppState;

/// Build the application router. Every route passes through the bearer
/// guard; the policy below is the complete list of public routes, and any
/// route missing from it is protected.
pub fn app(state: AppState) -> Router {
    let policy = RoutePolicy::new()
        .allow_public(Method::GET, "/")
        .allow_public(Method::GET, "/health")
        .allow_public(Method::POST, "/auth/login")
        .allow_public(Method::POST, "/cats");

    let guard = Guard {
        security: state.security.clone(),
        policy: Arc::new(policy),
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/auth/login", post(handlers::auth::login_post))
        .route("/profile", get(handlers::profile::profile_get))
        .route(
            "/cats",
            post(handlers::cats::create_cat).get(handlers::cats::list_cats),
        )
        .route(
            "/cats/:id",
            get(handlers::cats::get_cat)
                .patch(handlers::cats::update_cat)
                .delete(handlers::cats::delete_cat),
        )
        // Global middleware
        .layer(middleware::from_fn_with_state(guard, require_bearer_auth))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Cats API",
        "version": version,
        "description": "Cats CRUD backend with JWT bearer authentication (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "login": "POST /auth/login (public - token acquisition)",
            "profile": "GET /profile (protected)",
            "cats": "POST /cats (public), GET /cats, GET|PATCH|DELETE /cats/:id (protected)",
            "health": "GET /health (public)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
