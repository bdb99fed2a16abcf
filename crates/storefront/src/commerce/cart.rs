//! Cart operations.
//!
//! Lines are keyed by `(product_id, product_accessory_id)`; update and remove
//! address lines through that composite key.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use sphaerostyle_core::{CartLineKey, ProductId};

use super::types::{ApiMessage, CartLine, NewCartLine};
use super::{CommerceClient, CommerceError};

/// Quantity update payload: the composite key plus the new quantity.
#[derive(Debug, Serialize)]
struct QuantityUpdate {
    #[serde(flatten)]
    key: CartLineKey,
    quantity: u32,
}

impl CommerceClient {
    /// List the signed-in user's cart lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token))]
    pub async fn cart_lines(&self, token: &str) -> Result<Vec<CartLine>, CommerceError> {
        self.request(Method::GET, "/api/add-to-carts", Some(token))
            .await
    }

    /// Add a line to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token, line), fields(product_id = %line.product_id))]
    pub async fn add_to_cart(
        &self,
        token: &str,
        line: &NewCartLine,
    ) -> Result<ApiMessage, CommerceError> {
        self.request_json(Method::POST, "/api/add-to-carts", Some(token), line)
            .await
    }

    /// Set the quantity of an existing cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(product_id = %key.product_id, quantity))]
    pub async fn update_quantity(
        &self,
        token: &str,
        key: CartLineKey,
        quantity: u32,
    ) -> Result<ApiMessage, CommerceError> {
        self.request_json(
            Method::PUT,
            "/api/add-to-carts",
            Some(token),
            &QuantityUpdate { key, quantity },
        )
        .await
    }

    /// Remove a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(product_id = %key.product_id))]
    pub async fn remove_from_cart(
        &self,
        token: &str,
        key: CartLineKey,
    ) -> Result<ApiMessage, CommerceError> {
        self.request_json(Method::DELETE, "/api/add-to-carts", Some(token), &key)
            .await
    }

    /// Whether any cart line references the given product.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(product_id = %product_id))]
    pub async fn cart_contains(
        &self,
        token: &str,
        product_id: ProductId,
    ) -> Result<bool, CommerceError> {
        let lines = self.cart_lines(token).await?;
        Ok(lines.iter().any(|line| line.product_id == product_id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sphaerostyle_core::AccessoryId;

    #[test]
    fn test_quantity_update_flattens_key() {
        let update = QuantityUpdate {
            key: CartLineKey::new(ProductId::new(7), AccessoryId::new(1)),
            quantity: 3,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["product_id"], 7);
        assert_eq!(json["product_accessory_id"], 1);
        assert_eq!(json["quantity"], 3);
    }
}
