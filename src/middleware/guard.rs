use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{MatchedPath, Request, State},
    http::{header, HeaderMap, Method},
    middleware::Next,
    response::Response,
};

use crate::auth::{validate_token, AuthError, AuthUser};
use crate::config::SecurityConfig;
use crate::error::ApiError;

/// Per-route access classification. Routes that are not registered public
/// are protected; there is no way to opt a route out by omission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

/// Route access policy, recorded at registration time and consulted by the
/// guard on every request.
#[derive(Debug, Default, Clone)]
pub struct RoutePolicy {
    public: HashSet<(Method, String)>,
}

impl RoutePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one route pattern (as registered with the router, e.g.
    /// `/cats/:id`) as public.
    pub fn allow_public(mut self, method: Method, path: &str) -> Self {
        self.public.insert((method, path.to_string()));
        self
    }

    pub fn access(&self, method: &Method, path: &str) -> RouteAccess {
        if self.public.contains(&(method.clone(), path.to_string())) {
            RouteAccess::Public
        } else {
            RouteAccess::Protected
        }
    }
}

/// State for the guard middleware: the signing config plus the policy table.
#[derive(Clone)]
pub struct Guard {
    pub security: SecurityConfig,
    pub policy: Arc<RoutePolicy>,
}

/// Request guard. Public routes pass untouched; everything else needs a
/// valid bearer token, whose identity is attached to the request extensions
/// before the handler runs. Rejected requests never reach a handler.
pub async fn require_bearer_auth(
    State(guard): State<Guard>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let matched = request
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_owned());

    // Unmatched requests fall through as protected; the router 404s them
    // behind the same check.
    let access = match matched.as_deref() {
        Some(path) => guard.policy.access(request.method(), path),
        None => RouteAccess::Protected,
    };

    if access == RouteAccess::Public {
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(request.headers())?;
    let claims = validate_token(&token, &guard.security)?;
    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Pull the token out of `Authorization: Bearer <token>`. A missing header,
/// a different scheme, or an empty token all count as "no bearer token".
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;
    let value = header.to_str().map_err(|_| AuthError::MalformedToken)?;
    let token = value.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)?;
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token.to_string())
}
