//! Product CRUD.

use reqwest::Method;
use tracing::instrument;

use sphaerostyle_core::ProductId;

use super::types::{ApiMessage, Product, ProductForm};
use super::{BackendClient, BackendError};

impl BackendClient {
    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, BackendError> {
        self.fetch("/api/products", None).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(name = %form.product_name))]
    pub async fn create_product(
        &self,
        token: &str,
        form: &ProductForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::POST, "/api/products", token, form).await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(product_id = %product_id))]
    pub async fn update_product(
        &self,
        token: &str,
        product_id: ProductId,
        form: &ProductForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(
            Method::PUT,
            &format!("/api/products/{product_id}"),
            token,
            form,
        )
        .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self, token), fields(product_id = %product_id))]
    pub async fn delete_product(
        &self,
        token: &str,
        product_id: ProductId,
    ) -> Result<ApiMessage, BackendError> {
        self.send_empty(Method::DELETE, &format!("/api/products/{product_id}"), token)
            .await
    }
}
