//! Typed client for the commerce REST backend.
//!
//! # Architecture
//!
//! - Plain JSON over `reqwest`; one HTTP call per operation
//! - The backend is the source of truth - no local cache, no sync
//! - Bearer tokens are injected per call, never held in global state
//!
//! # Example
//!
//! ```rust,ignore
//! use sphaerostyle_storefront::commerce::CommerceClient;
//!
//! let commerce = CommerceClient::new(&config.backend_api_url);
//!
//! // Browse the catalog (anonymous)
//! let products = commerce.products().await?;
//!
//! // Operate on the signed-in user's cart
//! let lines = commerce.cart_lines(&token).await?;
//! ```

mod addresses;
mod auth;
mod cart;
mod catalog;
mod favorites;
mod orders;
mod payway;
pub mod types;

pub use payway::IssuedQr;

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

/// Errors that can occur when talking to the commerce backend.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// HTTP transport failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Credentials are missing or were rejected.
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The payment gateway declined the session request.
    #[error("Payment gateway declined ({code}): {message}")]
    Declined { code: String, message: String },
}

/// Client for the commerce REST backend.
///
/// Cheaply cloneable; all operations take `&self`.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<CommerceClientInner>,
}

struct CommerceClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CommerceClient {
    /// Create a new commerce backend client.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            inner: Arc::new(CommerceClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.clone(),
            }),
        }
    }

    /// Resolve a path against the backend base URL.
    fn endpoint(&self, path: &str) -> String {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        format!("{base}{path}")
    }

    /// Issue a request with an optional bearer token and no body.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, CommerceError> {
        let mut req = self.inner.client.request(method, self.endpoint(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let response = req.send().await?;
        Self::read_json(response).await
    }

    /// Issue a request with an optional bearer token and a JSON body.
    async fn request_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, CommerceError> {
        let mut req = self
            .inner
            .client
            .request(method, self.endpoint(path))
            .json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let response = req.send().await?;
        Self::read_json(response).await
    }

    /// Read a successful JSON body or convert the response into an error.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CommerceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        Err(Self::error_from(status, response).await)
    }

    /// Build a `CommerceError` from a non-success response.
    ///
    /// The backend reports failures as `{"message": ...}` or `{"error": ...}`;
    /// the message is surfaced verbatim when present.
    async fn error_from(status: StatusCode, response: reqwest::Response) -> CommerceError {
        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body).unwrap_or_else(|| {
            if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                body.chars().take(200).collect()
            }
        });

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CommerceError::Unauthorized,
            StatusCode::NOT_FOUND => CommerceError::NotFound(message),
            _ => CommerceError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Pull a human-readable message out of an error body, if there is one.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(String::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = CommerceClient::new(&"http://localhost:5000/".parse().unwrap());
        assert_eq!(
            client.endpoint("/api/products"),
            "http://localhost:5000/api/products"
        );

        let client = CommerceClient::new(&"http://localhost:5000".parse().unwrap());
        assert_eq!(
            client.endpoint("/api/products"),
            "http://localhost:5000/api/products"
        );
    }

    #[test]
    fn test_extract_message_prefers_message_field() {
        assert_eq!(
            extract_message(r#"{"message":"no such cart"}"#).unwrap(),
            "no such cart"
        );
        assert_eq!(
            extract_message(r#"{"error":"bad request"}"#).unwrap(),
            "bad request"
        );
        assert!(extract_message("not json").is_none());
        assert!(extract_message(r#"{"code":42}"#).is_none());
    }

    #[test]
    fn test_commerce_error_display() {
        let err = CommerceError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error (500): boom");

        let err = CommerceError::Declined {
            code: "11".to_string(),
            message: "expired".to_string(),
        };
        assert_eq!(err.to_string(), "Payment gateway declined (11): expired");
    }
}
