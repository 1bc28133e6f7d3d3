//! HTTP resource server over the local catalog.
//!
//! ```text
//! GET    /health
//! GET    /api/admin/home-content           PUT  /api/admin/home-content
//! GET    /api/admin/<kind>?destination=..  POST /api/admin/<kind>
//! GET    /api/admin/<kind>/<id>            PUT  /api/admin/<kind>/<id>
//! DELETE /api/admin/<kind>/<id>            DELETE /api/admin/<kind>?id=..
//! ```

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{get, put},
    Router,
};
use log::{info, warn};
use wayfare_core::Catalog;

pub mod error;
pub mod handlers;

/// Shared state of every route.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog,
}

pub const HEALTH_PATH: &str = "/health";
pub const HOME_CONTENT_PATH: &str = "/api/admin/home-content";
pub const COLLECTION_PATH: &str = "/api/admin/:kind";
pub const DOCUMENT_PATH: &str = "/api/admin/:kind/:id";

pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(handlers::health))
        .route(
            HOME_CONTENT_PATH,
            get(handlers::load_home).put(handlers::save_home),
        )
        .route(
            COLLECTION_PATH,
            get(handlers::list_documents)
                .post(handlers::create_document)
                .delete(handlers::delete_by_query),
        )
        .route(
            DOCUMENT_PATH,
            get(handlers::get_document)
                .put(handlers::update_document)
                .delete(handlers::delete_document),
        )
        .with_state(AppState { catalog })
}

/// Serves the resource API until Ctrl-C or SIGTERM.
pub async fn serve(catalog: Catalog, bind: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!("Resource server listening on http://{bind}");

    axum::serve(listener, router(catalog))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server stopped unexpectedly")?;

    info!("Resource server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Could not listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Could not listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod client_tests;
