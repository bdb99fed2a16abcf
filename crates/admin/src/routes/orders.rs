//! Order management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use sphaerostyle_core::OrderId;

use crate::backend::types::{AdminOrder, ApiMessage, StatusUpdate};
use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// List every order in the shop.
#[instrument(skip(state, staff))]
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
) -> Result<Json<Vec<AdminOrder>>> {
    Ok(Json(state.backend().all_orders(&staff.access_token).await?))
}

/// Move an order to a new status.
///
/// The status set is closed (`OrderStatus`); unknown values are rejected at
/// deserialization before any backend call.
#[instrument(skip(state, staff, update), fields(order_id = %order_id))]
pub async fn update_status(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(order_id): Path<OrderId>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .update_order_status(&staff.access_token, order_id, update.status)
            .await?,
    ))
}
