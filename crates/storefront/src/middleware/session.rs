//! Session middleware configuration.
//!
//! The gateway keeps sessions in memory: the backend owns user records, and
//! nothing server-side outlives a restart on purpose (payment sessions are
//! transient by design). The cookie is signed with the configured secret.

use secrecy::ExposeSecret;
use thiserror::Error;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::Key};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "spx_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Error deriving the cookie signing key from the configured secret.
#[derive(Debug, Error)]
#[error("invalid session secret: {0}")]
pub struct SessionKeyError(String);

/// Create the session layer with an in-memory store and signed cookies.
///
/// # Errors
///
/// Returns an error if the configured secret cannot be turned into a
/// signing key (config validation keeps it long enough, but the conversion
/// is still checked).
pub fn create_session_layer(
    config: &StorefrontConfig,
) -> Result<SessionManagerLayer<MemoryStore, SignedCookie>, SessionKeyError> {
    let key = Key::try_from(config.session_secret.expose_secret().as_bytes())
        .map_err(|e| SessionKeyError(e.to_string()))?;

    // Determine if we're in production (HTTPS)
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
