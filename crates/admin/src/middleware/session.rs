//! Session middleware configuration for the admin gateway.

use secrecy::ExposeSecret;
use thiserror::Error;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::Key};

use crate::config::AdminConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "spx_admin_session";

/// Session expiry time in seconds (24 hours; staff sessions are short).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Error deriving the cookie signing key from the configured secret.
#[derive(Debug, Error)]
#[error("invalid session secret: {0}")]
pub struct SessionKeyError(String);

/// Create the session layer with an in-memory store and signed cookies.
///
/// # Errors
///
/// Returns an error if the configured secret cannot be turned into a signing
/// key.
pub fn create_session_layer(
    config: &AdminConfig,
) -> Result<SessionManagerLayer<MemoryStore, SignedCookie>, SessionKeyError> {
    let key = Key::try_from(config.session_secret.expose_secret().as_bytes())
        .map_err(|e| SessionKeyError(e.to_string()))?;

    let is_secure = config.base_url.starts_with("https://");

    Ok(SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key))
}
