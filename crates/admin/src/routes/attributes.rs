//! Category, subcategory, color and size management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use sphaerostyle_core::{CategoryId, ColorId, SizeId, SubcategoryId};

use crate::backend::types::{
    ApiMessage, Category, CategoryForm, Color, ColorForm, Size, SizeForm, Subcategory,
    SubcategoryForm,
};
use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::state::AppState;

// =============================================================================
// Categories
// =============================================================================

/// List all categories.
#[instrument(skip(state, _staff))]
pub async fn list_categories(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.backend().categories().await?))
}

/// Create a category.
#[instrument(skip(state, staff, form))]
pub async fn create_category(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(form): Json<CategoryForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .create_category(&staff.access_token, &form)
            .await?,
    ))
}

/// Rename a category.
#[instrument(skip(state, staff, form), fields(category_id = %id))]
pub async fn update_category(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<CategoryId>,
    Json(form): Json<CategoryForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .update_category(&staff.access_token, id, &form)
            .await?,
    ))
}

/// Delete a category.
#[instrument(skip(state, staff), fields(category_id = %id))]
pub async fn delete_category(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<CategoryId>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .delete_category(&staff.access_token, id)
            .await?,
    ))
}

// =============================================================================
// Subcategories
// =============================================================================

/// List all subcategories.
#[instrument(skip(state, _staff))]
pub async fn list_subcategories(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<Vec<Subcategory>>> {
    Ok(Json(state.backend().subcategories().await?))
}

/// Create a subcategory.
#[instrument(skip(state, staff, form))]
pub async fn create_subcategory(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(form): Json<SubcategoryForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .create_subcategory(&staff.access_token, &form)
            .await?,
    ))
}

/// Update a subcategory.
#[instrument(skip(state, staff, form), fields(sub_category_id = %id))]
pub async fn update_subcategory(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<SubcategoryId>,
    Json(form): Json<SubcategoryForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .update_subcategory(&staff.access_token, id, &form)
            .await?,
    ))
}

/// Delete a subcategory.
#[instrument(skip(state, staff), fields(sub_category_id = %id))]
pub async fn delete_subcategory(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<SubcategoryId>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .delete_subcategory(&staff.access_token, id)
            .await?,
    ))
}

// =============================================================================
// Colors
// =============================================================================

/// List all colors.
#[instrument(skip(state, _staff))]
pub async fn list_colors(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<Vec<Color>>> {
    Ok(Json(state.backend().colors().await?))
}

/// Create a color.
#[instrument(skip(state, staff, form))]
pub async fn create_color(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(form): Json<ColorForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .create_color(&staff.access_token, &form)
            .await?,
    ))
}

/// Rename a color.
#[instrument(skip(state, staff, form), fields(color_id = %id))]
pub async fn update_color(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<ColorId>,
    Json(form): Json<ColorForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .update_color(&staff.access_token, id, &form)
            .await?,
    ))
}

/// Delete a color.
#[instrument(skip(state, staff), fields(color_id = %id))]
pub async fn delete_color(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<ColorId>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .delete_color(&staff.access_token, id)
            .await?,
    ))
}

// =============================================================================
// Sizes
// =============================================================================

/// List all sizes.
#[instrument(skip(state, _staff))]
pub async fn list_sizes(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> Result<Json<Vec<Size>>> {
    Ok(Json(state.backend().sizes().await?))
}

/// Create a size.
#[instrument(skip(state, staff, form))]
pub async fn create_size(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(form): Json<SizeForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .create_size(&staff.access_token, &form)
            .await?,
    ))
}

/// Rename a size.
#[instrument(skip(state, staff, form), fields(size_id = %id))]
pub async fn update_size(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<SizeId>,
    Json(form): Json<SizeForm>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .update_size(&staff.access_token, id, &form)
            .await?,
    ))
}

/// Delete a size.
#[instrument(skip(state, staff), fields(size_id = %id))]
pub async fn delete_size(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<SizeId>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .delete_size(&staff.access_token, id)
            .await?,
    ))
}
