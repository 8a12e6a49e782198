//! Authentication core: credential verification, token issuance and
//! token validation. Route enforcement lives in `middleware::guard`.

pub mod password;
pub mod token;
pub mod verifier;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub use token::{issue_token, validate_token, Claims};
pub use verifier::verify_credentials;

/// Why an authentication check failed. Every variant maps to the same
/// opaque 401 at the HTTP boundary; the distinction exists for diagnostics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("missing bearer token")]
    MissingToken,
    #[error("malformed token")]
    MalformedToken,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
}

/// Authenticated identity, reconstructed from verified claims or a
/// successful credential check. Attached to the request extensions by the
/// guard for downstream handlers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
        }
    }
}
