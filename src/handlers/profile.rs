use axum::{Extension, Json};

use crate::auth::AuthUser;

/// GET /profile - echo the identity the guard reconstructed from the token.
/// No store round trip: the claims are the session.
pub async fn profile_get(Extension(user): Extension<AuthUser>) -> Json<AuthUser> {
    Json(user)
}
