//! REST API for production planning.
//!
//! Provides one endpoint:
//! - `POST /productionplan` — computes a plan for the posted payload

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::post;

pub use types::ErrorResponse;

/// Builds the axum router with all API routes.
///
/// The router holds no state: every request is planned independently.
pub fn router() -> Router {
    Router::new().route("/productionplan", post(handlers::production_plan))
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind to `addr` or the
/// server fails.
pub async fn serve(addr: SocketAddr) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, router()).await
}
