use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::{issue_token, verify_credentials};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// POST /auth/login - verify credentials, then issue an access token.
///
/// The route is registered public; the credential check is the gate. The
/// issuer only runs after the verifier succeeds, and the failure body
/// never says whether the username existed.
pub async fn login_post(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let identity = verify_credentials(state.users.as_ref(), &body.username, &body.password).await?;

    let access_token = issue_token(&identity, &state.security).map_err(|err| {
        tracing::error!("token signing failed: {err:#}");
        ApiError::internal_server_error("Failed to issue access token")
    })?;

    tracing::info!(username = %identity.username, "login succeeded");
    Ok(Json(LoginResponse { access_token }))
}
