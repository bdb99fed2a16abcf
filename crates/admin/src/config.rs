//! Admin gateway configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BACKEND_API_URL` - Base URL of the commerce REST backend
//! - `ADMIN_BASE_URL` - Public URL for the admin gateway
//! - `ADMIN_SESSION_SECRET` - Session signing secret (min 64 chars)
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Session signing keys must be long enough to derive a cookie key from.
const MIN_SESSION_SECRET_LENGTH: usize = 64;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the commerce REST backend
    pub backend_api_url: Url,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin gateway
    pub base_url: String,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let backend_api_url = required("BACKEND_API_URL")?
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("BACKEND_API_URL".to_string(), e.to_string()))?;
        let host = or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let base_url = required("ADMIN_BASE_URL")?;

        let session_secret = SecretString::from(required("ADMIN_SESSION_SECRET")?);
        if session_secret.expose_secret().len() < MIN_SESSION_SECRET_LENGTH {
            return Err(ConfigError::InsecureSecret(
                "ADMIN_SESSION_SECRET".to_string(),
                format!("must be at least {MIN_SESSION_SECRET_LENGTH} characters"),
            ));
        }

        Ok(Self {
            backend_api_url,
            host,
            port,
            base_url,
            session_secret,
            sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            sentry_environment: std::env::var("SENTRY_ENVIRONMENT").ok(),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn required(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AdminConfig {
            backend_api_url: "http://localhost:5000".parse().unwrap(),
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            base_url: "http://localhost:3001".to_string(),
            session_secret: SecretString::from("x".repeat(64)),
            sentry_dsn: None,
            sentry_environment: None,
        };
        assert_eq!(config.socket_addr().port(), 3001);
    }
}
