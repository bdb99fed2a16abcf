//! Account route handlers: order history and profile updates.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::commerce::types::{ApiMessage, Order, UpdateProfile};
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// The signed-in user's order history.
#[instrument(skip(state, user))]
pub async fn orders(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<Order>>> {
    let orders = state
        .commerce()
        .user_orders(&user.access_token, user.user_id)
        .await?;
    Ok(Json(orders))
}

/// Update the signed-in user's profile fields.
#[instrument(skip(state, user, profile))]
pub async fn update_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(profile): Json<UpdateProfile>,
) -> Result<Json<ApiMessage>> {
    let ack = state
        .commerce()
        .update_profile(&user.access_token, user.user_id, &profile)
        .await?;
    Ok(Json(ack))
}
