//! Staff authentication against the backend.

use serde::Serialize;
use tracing::instrument;

use super::types::LoginResponse;
use super::{BackendClient, BackendError};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl BackendClient {
    /// Exchange staff credentials for a profile and bearer token.
    ///
    /// Role gating (staff only) happens in the route layer; the backend
    /// issues tokens for any valid account.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Unauthorized` on rejected credentials.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, BackendError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/auth"))
            .json(&Credentials { email, password })
            .send()
            .await?;
        Self::decode(response).await
    }
}
