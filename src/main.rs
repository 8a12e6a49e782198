use std::sync::Arc;

use cats_api::database::users::PgUserStore;
use cats_api::state::AppState;
use cats_api::{config, database, routes};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Cats API in {:?} mode", config.environment);

    // An unusable signing secret means unverifiable tokens; don't start.
    if let Err(err) = config.security.validate() {
        tracing::error!("refusing to start: {err}");
        std::process::exit(1);
    }

    let pool = match database::connect(&config.database) {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("refusing to start: {err:#}");
            std::process::exit(1);
        }
    };

    if let Err(err) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::warn!("migrations did not run, continuing degraded: {err}");
    }

    let state = AppState {
        pool: pool.clone(),
        users: Arc::new(PgUserStore::new(pool)),
        security: config.security.clone(),
    };

    let app = routes::app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Cats API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
