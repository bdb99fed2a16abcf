//! Favorites route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use sphaerostyle_core::{CartLineKey, ProductId};

use crate::commerce::types::{ApiMessage, Favorite};
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// List the signed-in user's favorites.
#[instrument(skip(state, user))]
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<Favorite>>> {
    let favorites = state.commerce().favorites(&user.access_token).await?;
    Ok(Json(favorites))
}

/// Add a product to favorites.
#[instrument(skip(state, user))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(key): Json<CartLineKey>,
) -> Result<Json<ApiMessage>> {
    let ack = state
        .commerce()
        .add_favorite(&user.access_token, key)
        .await?;
    Ok(Json(ack))
}

/// Remove a product from favorites.
#[instrument(skip(state, user))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(key): Json<CartLineKey>,
) -> Result<Json<ApiMessage>> {
    let ack = state
        .commerce()
        .remove_favorite(&user.access_token, key)
        .await?;
    Ok(Json(ack))
}

/// Whether the given product is favorited.
#[instrument(skip(state, user))]
pub async fn contains(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(product_id): Path<ProductId>,
) -> Result<Json<bool>> {
    let present = state
        .commerce()
        .is_favorite(&user.access_token, product_id)
        .await?;
    Ok(Json(present))
}
