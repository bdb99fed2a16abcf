//! Catalog browse route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use sphaerostyle_core::ProductId;

use crate::commerce::types::{Category, Color, Product, ProductDetail, Size, Subcategory};
use crate::error::Result;
use crate::state::AppState;

/// A product with its variant details, for the detail page.
#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub details: Vec<ProductDetail>,
}

/// List all products.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.commerce().products().await?))
}

/// List products joined with variant details.
#[instrument(skip(state))]
pub async fn with_details(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.commerce().products_with_details().await?))
}

/// Product detail: the product and its variants, fetched concurrently.
#[instrument(skip(state), fields(product_id = %product_id))]
pub async fn show(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<ProductView>> {
    let commerce = state.commerce();
    let (product, details) = tokio::try_join!(
        commerce.product(product_id),
        commerce.product_details_for(product_id),
    )?;
    Ok(Json(ProductView { product, details }))
}

/// List all categories.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.commerce().categories().await?))
}

/// List all subcategories.
#[instrument(skip(state))]
pub async fn subcategories(State(state): State<AppState>) -> Result<Json<Vec<Subcategory>>> {
    Ok(Json(state.commerce().subcategories().await?))
}

/// List all colors.
#[instrument(skip(state))]
pub async fn colors(State(state): State<AppState>) -> Result<Json<Vec<Color>>> {
    Ok(Json(state.commerce().colors().await?))
}

/// List all sizes.
#[instrument(skip(state))]
pub async fn sizes(State(state): State<AppState>) -> Result<Json<Vec<Size>>> {
    Ok(Json(state.commerce().sizes().await?))
}
