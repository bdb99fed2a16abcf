//! Sphaerostyle Admin - Internal back-office gateway.
//!
//! A staff-only JSON gateway over the commerce backend's management surface:
//! products, categories, attributes, variants, staff accounts, order status
//! management and image uploads. Pure passthrough - one backend call per
//! operation; the console refetches lists after mutations.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};

use middleware::session::SessionKeyError;
use state::AppState;

/// Build the admin application router.
///
/// # Errors
///
/// Returns an error if the session signing key cannot be derived from the
/// configured secret.
pub fn app(state: AppState) -> Result<Router, SessionKeyError> {
    let session_layer = middleware::create_session_layer(state.config())?;

    Ok(Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
