//! Typed client for the back-office surface of the commerce backend.
//!
//! Staff CRUD is pure passthrough: one HTTP call per operation, the staff
//! member's bearer token injected per call. List refetches after mutations
//! are left to the console.

mod attributes;
mod auth;
mod details;
mod orders;
mod products;
mod staff;
mod upload;
pub mod types;

pub use upload::UploadFile;

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

/// Errors from the back-office client.
#[derive(Debug, Error)]
pub enum BackendError {
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
}

/// Client for the back-office endpoints of the commerce backend.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a new back-office client.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.clone(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        format!("{base}{path}")
    }

    /// GET a JSON resource.
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, BackendError> {
        let mut req = self.inner.client.get(self.endpoint(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        Self::decode(req.send().await?).await
    }

    /// Send a JSON body with the given method.
    async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .inner
            .client
            .request(method, self.endpoint(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Issue a bodyless mutation (DELETE by id).
    async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: &str,
    ) -> Result<T, BackendError> {
        let response = self
            .inner
            .client
            .request(method, self.endpoint(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Decode a success body or convert the response into an error.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(serde_json::Value::as_str)
                    .map(String::from)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                BackendError::Unauthorized
            }
            reqwest::StatusCode::NOT_FOUND => BackendError::NotFound(message),
            _ => BackendError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}
