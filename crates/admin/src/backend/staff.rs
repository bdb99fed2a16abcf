//! Staff account CRUD.

use reqwest::Method;
use tracing::instrument;

use sphaerostyle_core::UserId;

use super::types::{ApiMessage, NewStaff, StaffUser, UpdateStaff};
use super::{BackendClient, BackendError};

impl BackendClient {
    /// List all accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token))]
    pub async fn staff(&self, token: &str) -> Result<Vec<StaffUser>, BackendError> {
        self.fetch("/api/users", Some(token)).await
    }

    /// Create a staff account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(email = %form.email))]
    pub async fn create_staff(
        &self,
        token: &str,
        form: &NewStaff,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::POST, "/api/users", token, form).await
    }

    /// Update a staff account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload.
    #[instrument(skip(self, token, form), fields(user_id = %user_id))]
    pub async fn update_staff(
        &self,
        token: &str,
        user_id: UserId,
        form: &UpdateStaff,
    ) -> Result<ApiMessage, BackendError> {
        self.send(Method::PUT, &format!("/api/users/{user_id}"), token, form)
            .await
    }

    /// Delete a staff account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails.
    #[instrument(skip(self, token), fields(user_id = %user_id))]
    pub async fn delete_staff(
        &self,
        token: &str,
        user_id: UserId,
    ) -> Result<ApiMessage, BackendError> {
        self.send_empty(Method::DELETE, &format!("/api/users/{user_id}"), token)
            .await
    }
}
