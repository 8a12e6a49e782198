//! Test support: an in-memory user store and fixed security settings so the
//! auth flow can be exercised without a database or real secrets.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::SecurityConfig;
use crate::database::models::UserRecord;
use crate::database::users::UserStore;

/// In-memory stand-in for the relational user store.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user, hashing the password with a low bcrypt cost to keep
    /// tests fast. Returns the stored record.
    pub fn insert_user(&self, username: &str, password: &str) -> UserRecord {
        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: bcrypt::hash(password, 4).expect("bcrypt hash"),
            created_at: now,
            updated_at: now,
        };
        self.users
            .write()
            .expect("user store lock")
            .insert(username.to_string(), record.clone());
        record
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<UserRecord>> {
        Ok(self
            .users
            .read()
            .expect("user store lock")
            .get(username)
            .cloned())
    }
}

/// Fixed signing settings for tests.
pub fn test_security() -> SecurityConfig {
    SecurityConfig {
        jwt_secret: "test-secret".to_string(),
        token_expiry_secs: 3600,
    }
}

/// A pool that never connects. Fine for tests that stay off the cats
/// endpoints; anything that does touch it gets a database error, not a hang.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_millis(250))
        .connect_lazy("postgres://127.0.0.1:1/unused")
        .expect("lazy pool")
}
