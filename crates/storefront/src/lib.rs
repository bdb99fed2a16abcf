//! Sphaerostyle Storefront - Public storefront gateway.
//!
//! A thin JSON gateway between shoppers and the commerce REST backend:
//! catalog browsing, bag, favorites, addresses, and the checkout
//! payment-session flow. Rendering is left to the clients; every route here
//! maps one UI action to one backend call (plus the bag's concurrent
//! catalog joins).
//!
//! # Architecture
//!
//! - Axum with signed-cookie sessions (in-memory store)
//! - [`commerce::CommerceClient`]: typed reqwest client for the backend
//! - [`checkout::CheckoutRegistry`]: the one stateful piece - QR payment
//!   sessions with an expiry watcher per flow
//! - Sentry + tracing for error tracking and logs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod commerce;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{Router, extract::State, http::StatusCode, routing::get};

use middleware::session::SessionKeyError;
use state::AppState;

/// Build the storefront application router.
///
/// # Errors
///
/// Returns an error if the session signing key cannot be derived from the
/// configured secret.
pub fn app(state: AppState) -> Result<Router, SessionKeyError> {
    let session_layer = middleware::create_session_layer(state.config())?;

    Ok(Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the backend.
async fn health() -> &'static str {
    "ok"
}

/// Readiness check: verifies the commerce backend is reachable.
///
/// Returns 503 Service Unavailable if the backend cannot be reached.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.commerce().products().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
