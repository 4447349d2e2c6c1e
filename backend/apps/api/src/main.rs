//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::error::AppError`.

use std::sync::Arc;

use api::{build_router, config::Config, db};
use auth::{SessionManager, SqliteAuthRepository};
use kernel::clock::{Clock, SystemClock};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::connect(&config.database_url).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Startup cleanup: errors here should not prevent server startup
    let sessions = SessionManager::new(
        Arc::new(SqliteAuthRepository::new(pool.clone())),
        Arc::new(config.auth_config()),
        clock.clone(),
    );
    if let Err(e) = sessions.cleanup_expired().await {
        tracing::warn!(
            error = %e,
            "Auth session cleanup failed, continuing anyway"
        );
    }

    let app = build_router(pool, &config, clock);

    tracing::info!(
        static_dir = %config.static_dir.display(),
        "Listening on {}",
        config.bind_address
    );

    let listener = TcpListener::bind(config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
