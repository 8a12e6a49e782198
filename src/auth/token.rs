use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{AuthError, AuthUser};
use crate::config::SecurityConfig;

/// JWT claims. The token is the whole session: no server-side state backs it,
/// so the identity here may be stale relative to the user store.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(identity: &AuthUser, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: identity.user_id,
            username: identity.username.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// Sign an access token for a verified identity (HS256).
///
/// The secret is validated at startup, so a failure here is an internal
/// error, not an authentication outcome.
pub fn issue_token(identity: &AuthUser, security: &SecurityConfig) -> anyhow::Result<String> {
    let claims = Claims::new(
        identity,
        Duration::seconds(security.token_expiry_secs as i64),
    );
    let key = EncodingKey::from_secret(security.jwt_secret.as_bytes());
    Ok(encode(&Header::default(), &claims, &key)?)
}

/// Verify signature and expiry, and reconstruct the claims.
pub fn validate_token(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(security.jwt_secret.as_bytes());
    let mut validation = Validation::default();
    // No expiry leeway: a token is invalid the second it expires.
    validation.leeway = 0;

    let data = decode::<Claims>(token, &key, &validation).map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::MalformedToken,
    })?;

    Ok(data.claims)
}
