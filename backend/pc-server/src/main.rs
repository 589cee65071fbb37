use pc_server::{AppState, build_router, error::ServerError, logger};

use pc_random_user::RandomUserClient;
use pc_store::FlatFileStore;

use std::error::Error;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = pc_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir).map_err(ServerError::from)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let storage_path = config.storage_path()?;
    let store = FlatFileStore::new(storage_path);
    store.ensure_initialized().map_err(ServerError::from)?;
    info!("User store ready at {}", store.path().display());

    let random_users = RandomUserClient::with_timeout(
        &config.random_user.base_url,
        Duration::from_secs(config.random_user.timeout_secs),
    )
    .map_err(ServerError::from)?;

    let app_state = AppState::new(store, random_users, config.random_user.clone());
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Port 0 means the OS picked one
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
