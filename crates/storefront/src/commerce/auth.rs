//! Authentication and profile operations against the backend.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use sphaerostyle_core::UserId;

use super::types::{ApiMessage, LoginResponse, RegisterRequest, UpdateProfile};
use super::{CommerceClient, CommerceError};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl CommerceClient {
    /// Exchange credentials for a profile and bearer token.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::Unauthorized` on rejected credentials.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, CommerceError> {
        self.request_json(Method::POST, "/auth", None, &Credentials { email, password })
            .await
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the registration.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, CommerceError> {
        self.request_json(Method::POST, "/register", None, request)
            .await
    }

    /// Update the signed-in user's profile fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token, profile), fields(user_id = %user_id))]
    pub async fn update_profile(
        &self,
        token: &str,
        user_id: UserId,
        profile: &UpdateProfile,
    ) -> Result<ApiMessage, CommerceError> {
        self.request_json(
            Method::PUT,
            &format!("/api/profile/{user_id}"),
            Some(token),
            profile,
        )
        .await
    }
}
