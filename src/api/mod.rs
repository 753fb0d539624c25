//! REST API over the estimation pipeline.
//!
//! Provides three endpoints:
//! - `GET /catalog`: appliances and their rated power
//! - `GET /tariff`: configured cost per kWh by source
//! - `POST /estimate`: usage, costs, advice and tenant plan for a selection

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::advisor::Advisor;

pub use types::{ApplianceRecord, ErrorResponse, EstimateResponse, TariffRecord};

/// Immutable application state shared across all request handlers.
///
/// The catalog and tariffs are read-only after startup, so no locks are needed.
pub struct AppState {
    pub advisor: Advisor,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/catalog", get(handlers::get_catalog))
        .route("/tariff", get(handlers::get_tariff))
        .route("/estimate", post(handlers::post_estimate))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
