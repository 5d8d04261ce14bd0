//! DeskHub - collaborative workspace gateway
//!
//! Main entry point for the gateway binary.

use std::sync::Arc;

use deskhub_gateway::{routes, AppContext};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from a .env file
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded .env from: {:?}", path),
        Err(e) => tracing::warn!("Could not load .env file: {}", e),
    }

    let config = deskhub_infra::config::load()?;
    let ctx = Arc::new(AppContext::new(&config)?);
    let app = routes::router(ctx);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "DeskHub gateway listening");

    axum::serve(listener, app).await?;
    Ok(())
}
