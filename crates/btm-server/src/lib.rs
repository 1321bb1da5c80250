//! # btm-server
//!
//! HTTP API for the exercise catalog. Every route lives under `/api/v1`
//! except `/health`; errors are returned as `{"error": "..."}`.

pub mod error;
pub mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::AppState;

/// Build the application router around `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::router())
        .route("/health", get(routes::health::get_health))
        .layer(Extension(Arc::new(state)))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Bind `addr` and serve until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
#[tracing::instrument(level = "info", skip(state))]
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "btm api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
