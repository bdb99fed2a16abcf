//! Application state shared across handlers.

use std::sync::Arc;

use crate::checkout::CheckoutRegistry;
use crate::commerce::CommerceClient;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// commerce backend client and the checkout registry.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    commerce: CommerceClient,
    checkout: CheckoutRegistry,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let commerce = CommerceClient::new(&config.backend_api_url);
        let checkout = CheckoutRegistry::new(commerce.clone(), config.payment_window);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                commerce,
                checkout,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the commerce backend client.
    #[must_use]
    pub fn commerce(&self) -> &CommerceClient {
        &self.inner.commerce
    }

    /// Get a reference to the checkout registry.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutRegistry {
        &self.inner.checkout
    }
}
