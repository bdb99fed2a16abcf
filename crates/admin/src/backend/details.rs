//! Product variant (detail) CRUD.

use reqwest::Method;
use tracing::instrument;

use sphaerostyle_core::{ProductDetailId, ProductId};

use super::types::{ApiMessage, ProductDetail, ProductDetailForm};
use super::{BackendClient, BackendError};

impl BackendClient {
    /// List all variants across products.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn product_details(&self) -> Result<Vec<ProductDetail>, BackendError> {
        self.fetch("/api/product-details", None).await
    }

    /// List the variants of one product.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product_details_for(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<ProductDetail>, BackendError> {
        self.fetch(&format!("/api/product-details/product/{product_id}"), None)
            .await
    }

    /// Create a variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(product_id = %form.product_id))]
    pub async fn create_product_detail(
        &self,
        token: &str,
        form: &ProductDetailForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::POST, "/api/product-details", token, form)
            .await
    }

    /// Update a variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(detail_id = %detail_id))]
    pub async fn update_product_detail(
        &self,
        token: &str,
        detail_id: ProductDetailId,
        form: &ProductDetailForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(
            Method::PUT,
            &format!("/api/product-details/{detail_id}"),
            token,
            form,
        )
        .await
    }

    /// Delete a variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self, token), fields(detail_id = %detail_id))]
    pub async fn delete_product_detail(
        &self,
        token: &str,
        detail_id: ProductDetailId,
    ) -> Result<ApiMessage, BackendError> {
        self.send_empty(
            Method::DELETE,
            &format!("/api/product-details/{detail_id}"),
            token,
        )
        .await
    }
}
