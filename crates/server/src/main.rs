//! HTTP API for article extraction.
//!
//! `POST /api/parse` with `{"url": ...}` or `{"html": ...}` returns
//! `{"date", "title", "content"}`; `GET /health` answers `{"status": "ok"}`.

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;
mod config;
mod error;
mod routes;

use app::{AppState, build_app};
use config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lede_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ServerConfig { addr, settings } = ServerConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(timeout = settings.fetch.timeout, "configuration loaded");

    let app = build_app(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
