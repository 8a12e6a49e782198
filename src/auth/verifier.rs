use once_cell::sync::Lazy;

use crate::auth::{password, AuthError, AuthUser};
use crate::database::users::UserStore;
use crate::error::ApiError;

// Burned on lookup misses so an unknown username costs the same bcrypt
// work as a wrong password.
static FALLBACK_HASH: Lazy<String> =
    Lazy::new(|| bcrypt::hash("fallback", bcrypt::DEFAULT_COST).unwrap_or_default());

/// Check a username/password pair against the user store.
///
/// Unknown user and wrong password are indistinguishable to the caller:
/// both come back as `InvalidCredentials`. Store failures surface as
/// server errors, never as authentication outcomes. Read-only.
pub async fn verify_credentials(
    store: &dyn UserStore,
    username: &str,
    plaintext_password: &str,
) -> Result<AuthUser, ApiError> {
    let found = store.find_user_by_username(username).await.map_err(|err| {
        tracing::error!("user lookup failed: {err:#}");
        ApiError::service_unavailable("Service temporarily unavailable")
    })?;

    let Some(user) = found else {
        let _ = password::verify_password(plaintext_password, &FALLBACK_HASH);
        return Err(AuthError::InvalidCredentials.into());
    };

    match password::verify_password(plaintext_password, &user.password_hash) {
        Ok(true) => Ok(AuthUser {
            user_id: user.id,
            username: user.username,
        }),
        Ok(false) => Err(AuthError::InvalidCredentials.into()),
        Err(err) => {
            // A stored hash bcrypt cannot parse; reject like any bad login.
            tracing::error!(username = %user.username, "unusable password hash: {err:#}");
            Err(AuthError::InvalidCredentials.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryUserStore;

    #[tokio::test]
    async fn valid_credentials_return_the_identity() {
        let store = MemoryUserStore::new();
        let seeded = store.insert_user("alice", "correct");

        let identity = verify_credentials(&store, "alice", "correct").await.unwrap();
        assert_eq!(identity.user_id, seeded.id);
        assert_eq!(identity.username, "alice");
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_are_indistinguishable() {
        let store = MemoryUserStore::new();
        store.insert_user("alice", "correct");

        let wrong_password = verify_credentials(&store, "alice", "nope")
            .await
            .unwrap_err();
        let unknown_user = verify_credentials(&store, "mallory", "nope")
            .await
            .unwrap_err();

        assert_eq!(wrong_password.status_code(), 401);
        assert_eq!(wrong_password.status_code(), unknown_user.status_code());
        assert_eq!(wrong_password.to_json(), unknown_user.to_json());
    }

    #[tokio::test]
    async fn identity_never_carries_the_password() {
        let store = MemoryUserStore::new();
        store.insert_user("alice", "correct");

        let identity = verify_credentials(&store, "alice", "correct").await.unwrap();
        let serialized = serde_json::to_string(&identity).unwrap();
        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("correct"));
    }
}
