//! Order management: list every order, move one through statuses.

use reqwest::Method;
use tracing::instrument;

use sphaerostyle_core::{OrderId, OrderStatus};

use super::types::{AdminOrder, ApiMessage, StatusUpdate};
use super::{BackendClient, BackendError};

impl BackendClient {
    /// List every order in the shop.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the token is rejected.
    #[instrument(skip(self, token))]
    pub async fn all_orders(&self, token: &str) -> Result<Vec<AdminOrder>, BackendError> {
        self.fetch("/api/orders/admin/all", Some(token)).await
    }

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the transition.
    #[instrument(skip(self, token), fields(order_id = %order_id, status = %status))]
    pub async fn update_order_status(
        &self,
        token: &str,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<ApiMessage, BackendError> {
        self.send(
            Method::PATCH,
            &format!("/api/orders/{order_id}/status"),
            token,
            &StatusUpdate { status },
        )
        .await
    }
}
