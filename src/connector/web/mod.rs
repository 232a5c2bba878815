//! HTTP surface: the consultation form plus a small JSON API.

mod handlers;
pub mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tracing::{info, warn};

use crate::connector::api::Container;

pub use handlers::StatusResponse;

#[derive(Clone)]
pub struct AppState {
    pub container: Arc<Container>,
}

pub fn create_router(container: Arc<Container>) -> Router {
    let state = AppState { container };

    Router::new()
        .route("/", get(handlers::index))
        .route("/consult", post(handlers::consult_form))
        .route("/api/consult", post(handlers::consult_api))
        .route("/api/status", get(handlers::status))
        .with_state(state)
}

/// Serve the form on `bind` until Ctrl+C.
pub async fn serve(container: Arc<Container>, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind web server to {}", bind))?;

    let local_addr = listener.local_addr()?;
    info!("Listening on http://{}", local_addr);

    axum::serve(listener, create_router(container))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
