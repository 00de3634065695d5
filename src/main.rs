//! Marketplace API - Application entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketplace_api::{api, AppResult, Config, Database};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!("startup failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded");

    let database = Arc::new(Database::connect(&config).await?);
    database.ensure_indexes().await?;

    let state = api::AppState::from_config(database, &config)?;
    let app = api::create_router(state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| marketplace_api::AppError::internal(format!("failed to bind {}: {}", addr, e)))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| marketplace_api::AppError::internal(format!("server error: {}", e)))
}

/// Initialize tracing subscriber
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
