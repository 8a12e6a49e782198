use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A user row as stored. Deliberately not `Serialize`: the password hash
/// must never leave the process.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
