//! Category, subcategory, color and size CRUD.

use reqwest::Method;
use tracing::instrument;

use sphaerostyle_core::{CategoryId, ColorId, SizeId, SubcategoryId};

use super::types::{
    ApiMessage, Category, CategoryForm, Color, ColorForm, Size, SizeForm, Subcategory,
    SubcategoryForm,
};
use super::{BackendClient, BackendError};

impl BackendClient {
    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, BackendError> {
        self.fetch("/api/categories", None).await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(name = %form.category_name))]
    pub async fn create_category(
        &self,
        token: &str,
        form: &CategoryForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::POST, "/api/categories", token, form).await
    }

    /// Rename a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(category_id = %category_id))]
    pub async fn update_category(
        &self,
        token: &str,
        category_id: CategoryId,
        form: &CategoryForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(
            Method::PUT,
            &format!("/api/categories/{category_id}"),
            token,
            form,
        )
        .await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self, token), fields(category_id = %category_id))]
    pub async fn delete_category(
        &self,
        token: &str,
        category_id: CategoryId,
    ) -> Result<ApiMessage, BackendError> {
        self.send_empty(
            Method::DELETE,
            &format!("/api/categories/{category_id}"),
            token,
        )
        .await
    }

    /// List all subcategories.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn subcategories(&self) -> Result<Vec<Subcategory>, BackendError> {
        self.fetch("/api/subcategories", None).await
    }

    /// Create a subcategory.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(name = %form.sub_category_name))]
    pub async fn create_subcategory(
        &self,
        token: &str,
        form: &SubcategoryForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::POST, "/api/subcategories", token, form)
            .await
    }

    /// Update a subcategory.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(sub_category_id = %sub_category_id))]
    pub async fn update_subcategory(
        &self,
        token: &str,
        sub_category_id: SubcategoryId,
        form: &SubcategoryForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(
            Method::PUT,
            &format!("/api/subcategories/{sub_category_id}"),
            token,
            form,
        )
        .await
    }

    /// Delete a subcategory.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self, token), fields(sub_category_id = %sub_category_id))]
    pub async fn delete_subcategory(
        &self,
        token: &str,
        sub_category_id: SubcategoryId,
    ) -> Result<ApiMessage, BackendError> {
        self.send_empty(
            Method::DELETE,
            &format!("/api/subcategories/{sub_category_id}"),
            token,
        )
        .await
    }

    /// List all colors.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn colors(&self) -> Result<Vec<Color>, BackendError> {
        self.fetch("/api/colors", None).await
    }

    /// Create a color.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(name = %form.color_name))]
    pub async fn create_color(
        &self,
        token: &str,
        form: &ColorForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::POST, "/api/colors", token, form).await
    }

    /// Rename a color.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(color_id = %color_id))]
    pub async fn update_color(
        &self,
        token: &str,
        color_id: ColorId,
        form: &ColorForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::PUT, &format!("/api/colors/{color_id}"), token, form)
            .await
    }

    /// Delete a color.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self, token), fields(color_id = %color_id))]
    pub async fn delete_color(
        &self,
        token: &str,
        color_id: ColorId,
    ) -> Result<ApiMessage, BackendError> {
        self.send_empty(Method::DELETE, &format!("/api/colors/{color_id}"), token)
            .await
    }

    /// List all sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self))]
    pub async fn sizes(&self) -> Result<Vec<Size>, BackendError> {
        self.fetch("/api/sizes", None).await
    }

    /// Create a size.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(name = %form.size_name))]
    pub async fn create_size(
        &self,
        token: &str,
        form: &SizeForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::POST, "/api/sizes", token, form).await
    }

    /// Rename a size.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(size_id = %size_id))]
    pub async fn update_size(
        &self,
        token: &str,
        size_id: SizeId,
        form: &SizeForm,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::PUT, &format!("/api/sizes/{size_id}"), token, form)
            .await
    }

    /// Delete a size.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self, token), fields(size_id = %size_id))]
    pub async fn delete_size(
        &self,
        token: &str,
        size_id: SizeId,
    ) -> Result<ApiMessage, BackendError> {
        self.send_empty(Method::DELETE, &format!("/api/sizes/{size_id}"), token)
            .await
    }
}
