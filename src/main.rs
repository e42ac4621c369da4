use animepulse::modules::http::{create_router, shutdown_signal};
use animepulse::shared::utils::init_logger;
use animepulse::shared::{AppConfig, Database};
use animepulse::{build_app_state, log_info};
use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_logger();

    let database_url = config.require_database_url()?;
    let database = Arc::new(Database::new(database_url)?);

    // Diesel is blocking; keep migrations off the runtime threads
    let migrations_db = Arc::clone(&database);
    tokio::task::spawn_blocking(move || migrations_db.run_pending_migrations())
        .await
        .context("migration task panicked")??;

    let state = build_app_state(&config, database)?;
    let app = create_router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    log_info!("App is running at http://{}", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    log_info!("Server stopped");
    Ok(())
}
