//! Delivery address operations.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use sphaerostyle_core::{AddressId, UserId};

use super::types::{Address, ApiMessage, NewAddress, UpdateAddress};
use super::{CommerceClient, CommerceError};

#[derive(Debug, Serialize)]
struct SetDefaultBody {
    user_id: UserId,
}

impl CommerceClient {
    /// List a user's delivery addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(user_id = %user_id))]
    pub async fn addresses(
        &self,
        token: &str,
        user_id: UserId,
    ) -> Result<Vec<Address>, CommerceError> {
        self.request(
            Method::GET,
            &format!("/api/user-addresses/{user_id}"),
            Some(token),
        )
        .await
    }

    /// Create a delivery address.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token, address), fields(user_id = %address.user_id))]
    pub async fn create_address(
        &self,
        token: &str,
        address: &NewAddress,
    ) -> Result<ApiMessage, CommerceError> {
        self.request_json(Method::POST, "/api/user-addresses", Some(token), address)
            .await
    }

    /// Update an existing delivery address.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token, address), fields(address_id = %address_id))]
    pub async fn update_address(
        &self,
        token: &str,
        address_id: AddressId,
        address: &UpdateAddress,
    ) -> Result<ApiMessage, CommerceError> {
        self.request_json(
            Method::PUT,
            &format!("/api/user-addresses/{address_id}"),
            Some(token),
            address,
        )
        .await
    }

    /// Delete a delivery address.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(address_id = %address_id))]
    pub async fn delete_address(
        &self,
        token: &str,
        address_id: AddressId,
    ) -> Result<ApiMessage, CommerceError> {
        self.request(
            Method::DELETE,
            &format!("/api/user-addresses/{address_id}"),
            Some(token),
        )
        .await
    }

    /// Flag an address as the user's default.
    ///
    /// The single-default rule is checked by callers before this call; the
    /// backend does not enforce it atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(address_id = %address_id, user_id = %user_id))]
    pub async fn set_default_address(
        &self,
        token: &str,
        address_id: AddressId,
        user_id: UserId,
    ) -> Result<ApiMessage, CommerceError> {
        self.request_json(
            Method::PATCH,
            &format!("/api/user-addresses/default/{address_id}"),
            Some(token),
            &SetDefaultBody { user_id },
        )
        .await
    }
}
