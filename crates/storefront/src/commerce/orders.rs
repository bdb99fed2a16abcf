//! Order submission and history.

use reqwest::{Method, StatusCode};
use tracing::instrument;
use uuid::Uuid;

use sphaerostyle_core::UserId;

use super::types::{NewOrder, Order};
use super::{CommerceClient, CommerceError};

impl CommerceClient {
    /// Submit a finalized order.
    ///
    /// Success is exactly HTTP 201. Any other outcome - including other 2xx
    /// statuses - is reported verbatim as a failure; no automatic retry. The
    /// idempotency key is generated once per checkout flow so a retried
    /// submission can be deduplicated by the backend.
    ///
    /// # Errors
    ///
    /// Returns an error for any response other than 201 Created.
    #[instrument(skip(self, token, order), fields(total = %order.total, items = order.items.len()))]
    pub async fn create_order(
        &self,
        token: &str,
        idempotency_key: Uuid,
        order: &NewOrder,
    ) -> Result<(), CommerceError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/api/orders"))
            .bearer_auth(token)
            .header("Idempotency-Key", idempotency_key.to_string())
            .json(order)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }
        Err(Self::error_from(status, response).await)
    }

    /// Fetch the signed-in user's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token), fields(user_id = %user_id))]
    pub async fn user_orders(
        &self,
        token: &str,
        user_id: UserId,
    ) -> Result<Vec<Order>, CommerceError> {
        self.request(
            Method::GET,
            &format!("/api/orders/user/{user_id}"),
            Some(token),
        )
        .await
    }
}
