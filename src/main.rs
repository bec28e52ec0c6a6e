//! EventHub API - Binary Entry Point
//!
//! Loads configuration, prepares storage and serves the HTTP API until
//! Ctrl+C.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use event_hub::api::{create_router, AppState};
use event_hub::store::EventStore;
use event_hub::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let store = Arc::new(EventStore::new(config.store.clone()));
    store.initialize().await;

    let app = create_router(Arc::new(AppState::new(store)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            // Without a signal handler, run until killed
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
