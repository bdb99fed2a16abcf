//! Application state shared across handlers.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::config::AdminConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: BackendClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let backend = BackendClient::new(&config.backend_api_url);
        Self {
            inner: Arc::new(AppStateInner { config, backend }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the back-office backend client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }
}
