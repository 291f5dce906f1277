//! Binary crate for the `skycast-proxy` server.
//!
//! This crate focuses on:
//! - Reading server configuration from the environment
//! - Serving `/api/weather` over HTTP
//! - Mapping upstream failures to the uniform error envelope

use std::sync::Arc;

use skycast_core::OpenWeatherClient;
use skycast_proxy::{api, config::ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let source = Arc::new(OpenWeatherClient::new(config.api_key.clone()));

    let app = api::router(source);

    tracing::info!("Weather proxy listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
    }
}
