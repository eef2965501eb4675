//! Trackboard - team activity tracking service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trackboard_infra::load_config;
use trackboard_server::{api_router, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "could not load .env file"),
    }

    let config = load_config()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let ctx = AppContext::new(config).await?;
    let app = api_router().with_state(Arc::new(ctx));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "trackboard server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
