//! Product variant management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use sphaerostyle_core::{ProductDetailId, ProductId};

use crate::backend::types::{ApiMessage, ProductDetail, ProductDetailForm};
use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// List all variants.
#[instrument(skip(state, _staff))]
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<Vec<ProductDetail>>> {
    Ok(Json(state.backend().product_details().await?))
}

/// List one product's variants.
#[instrument(skip(state, _staff), fields(product_id = %product_id))]
pub async fn list_for_product(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Vec<ProductDetail>>> {
    Ok(Json(
        state.backend().product_details_for(product_id).await?,
    ))
}

/// Create a variant.
#[instrument(skip(state, staff, form), fields(product_id = %form.product_id))]
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(form): Json<ProductDetailForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .create_product_detail(&staff.access_token, &form)
            .await?,
    ))
}

/// Update a variant.
#[instrument(skip(state, staff, form), fields(detail_id = %detail_id))]
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(detail_id): Path<ProductDetailId>,
    Json(form): Json<ProductDetailForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .update_product_detail(&staff.access_token, detail_id, &form)
            .await?,
    ))
}

/// Delete a variant.
#[instrument(skip(state, staff), fields(detail_id = %detail_id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(detail_id): Path<ProductDetailId>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .delete_product_detail(&staff.access_token, detail_id)
            .await?,
    ))
}
