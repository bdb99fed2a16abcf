//! Catalog operations: products, variants, categories, attributes.
//!
//! All reads are anonymous and uncached; the backend is always consulted.

use reqwest::Method;
use tracing::instrument;

use sphaerostyle_core::ProductId;

use super::types::{Category, Color, Product, ProductDetail, Size, Subcategory};
use super::{CommerceClient, CommerceError};

impl CommerceClient {
    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CommerceError> {
        self.request(Method::GET, "/api/products", None).await
    }

    /// List products joined with their variant details.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn products_with_details(&self) -> Result<Vec<Product>, CommerceError> {
        self.request(Method::GET, "/api/products/with-details", None)
            .await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::NotFound` if the product does not exist.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product(&self, product_id: ProductId) -> Result<Product, CommerceError> {
        self.request(Method::GET, &format!("/api/products/{product_id}"), None)
            .await
    }

    /// List all variant details across products.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn product_details(&self) -> Result<Vec<ProductDetail>, CommerceError> {
        self.request(Method::GET, "/api/product-details", None).await
    }

    /// List the variant details of one product.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product_details_for(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<ProductDetail>, CommerceError> {
        self.request(
            Method::GET,
            &format!("/api/product-details/product/{product_id}"),
            None,
        )
        .await
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, CommerceError> {
        self.request(Method::GET, "/api/categories", None).await
    }

    /// List all subcategories.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn subcategories(&self) -> Result<Vec<Subcategory>, CommerceError> {
        self.request(Method::GET, "/api/subcategories", None).await
    }

    /// List all colors.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn colors(&self) -> Result<Vec<Color>, CommerceError> {
        self.request(Method::GET, "/api/colors", None).await
    }

    /// List all sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn sizes(&self) -> Result<Vec<Size>, CommerceError> {
        self.request(Method::GET, "/api/sizes", None).await
    }
}
