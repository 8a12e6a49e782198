use std::time::Duration;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

pub mod cats;
pub mod models;
pub mod users;

/// Build the connection pool from `DATABASE_URL`. Connections are opened
/// lazily, so startup does not depend on the database being reachable.
pub fn connect(config: &crate::config::DatabaseConfig) -> anyhow::Result<PgPool> {
    let url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect_lazy(&url)
        .context("invalid DATABASE_URL")?;
    Ok(pool)
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
