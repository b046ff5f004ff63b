use cred_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = cred_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cred-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    info!("Connecting to database: {}", config.database.url);
    let pool = cred_db::connect(&config.database.url, config.database.max_connections).await?;
    info!("Database ready");

    let app_state = AppState::new(pool.clone(), &config.auth)?;
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual bound address (port 0 is auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
