//! Favorites operations, keyed like cart lines.

use reqwest::Method;
use tracing::instrument;

use sphaerostyle_core::{CartLineKey, ProductId};

use super::types::{ApiMessage, Favorite};
use super::{CommerceClient, CommerceError};

impl CommerceClient {
    /// List the signed-in user's favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token))]
    pub async fn favorites(&self, token: &str) -> Result<Vec<Favorite>, CommerceError> {
        self.request(Method::GET, "/api/favorites", Some(token))
            .await
    }

    /// Add a product to favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(product_id = %key.product_id))]
    pub async fn add_favorite(
        &self,
        token: &str,
        key: CartLineKey,
    ) -> Result<ApiMessage, CommerceError> {
        self.request_json(Method::POST, "/api/favorites", Some(token), &key)
            .await
    }

    /// Remove a product from favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(product_id = %key.product_id))]
    pub async fn remove_favorite(
        &self,
        token: &str,
        key: CartLineKey,
    ) -> Result<ApiMessage, CommerceError> {
        self.request_json(Method::DELETE, "/api/favorites", Some(token), &key)
            .await
    }

    /// Whether the given product is favorited.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(product_id = %product_id))]
    pub async fn is_favorite(
        &self,
        token: &str,
        product_id: ProductId,
    ) -> Result<bool, CommerceError> {
        let favorites = self.favorites(token).await?;
        Ok(favorites.iter().any(|f| f.product_id == product_id))
    }
}
