//! Mountview HTTP server

use std::sync::Arc;

use anyhow::Context as _;
use mountview_app::{router, AppContext};
use mountview_infra::{config, init_tracing, LogFormat};
use tokio::net::TcpListener;
use tracing::{info, warn};

const ENV_LOG_FORMAT: &str = "MOUNTVIEW_LOG_FORMAT";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let format = std::env::var(ENV_LOG_FORMAT)
        .ok()
        .map(|raw| raw.parse::<LogFormat>())
        .transpose()?
        .unwrap_or_default();
    init_tracing(format).context("failed to initialise tracing")?;

    let config = config::load().context("failed to load configuration")?;
    let bind_address = config.server.bind_address.clone();
    let context = Arc::new(AppContext::new(config).context("failed to build application")?);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %listener.local_addr()?, "mountview listening");

    axum::serve(listener, router(context))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("mountview stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
