use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cat {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
