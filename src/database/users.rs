use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::UserRecord;

/// The one store operation the authentication core needs. Kept behind a
/// trait so the core can run against Postgres in production and an
/// in-memory map in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<UserRecord>>;
}

/// Postgres-backed user store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, password_hash, created_at, updated_at \
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
