use std::sync::Arc;

use sqlx::PgPool;

use crate::config::SecurityConfig;
use crate::database::users::UserStore;

/// Shared application state. Everything in here is read-only per request:
/// the pool manages its own interior synchronization and the security
/// settings are fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub users: Arc<dyn UserStore>,
    pub security: SecurityConfig,
}
