//! Product management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use sphaerostyle_core::ProductId;

use crate::backend::types::{ApiMessage, Product, ProductForm};
use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// List all products.
#[instrument(skip(state, _staff))]
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.backend().products().await?))
}

/// Create a product.
#[instrument(skip(state, staff, form))]
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(form): Json<ProductForm>,
) -> Result<Json<ApiMessage>> {
    let ack = state
        .backend()
        .create_product(&staff.access_token, &form)
        .await?;
    Ok(Json(ack))
}

/// Update a product.
#[instrument(skip(state, staff, form), fields(product_id = %product_id))]
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(product_id): Path<ProductId>,
    Json(form): Json<ProductForm>,
) -> Result<Json<ApiMessage>> {
    let ack = state
        .backend()
        .update_product(&staff.access_token, product_id, &form)
        .await?;
    Ok(Json(ack))
}

/// Delete a product.
#[instrument(skip(state, staff), fields(product_id = %product_id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(product_id): Path<ProductId>,
) -> Result<Json<ApiMessage>> {
    let ack = state
        .backend()
        .delete_product(&staff.access_token, product_id)
        .await?;
    Ok(Json(ack))
}
