//! Staff account management handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use sphaerostyle_core::UserId;

use crate::backend::types::{ApiMessage, NewStaff, StaffUser, UpdateStaff};
use crate::error::Result;
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// List all accounts.
#[instrument(skip(state, staff))]
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
) -> Result<Json<Vec<StaffUser>>> {
    Ok(Json(state.backend().staff(&staff.access_token).await?))
}

/// Create a staff account.
#[instrument(skip(state, staff, form), fields(email = %form.email))]
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(form): Json<NewStaff>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .create_staff(&staff.access_token, &form)
            .await?,
    ))
}

/// Update a staff account.
#[instrument(skip(state, staff, form), fields(user_id = %user_id))]
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(user_id): Path<UserId>,
    Json(form): Json<UpdateStaff>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .update_staff(&staff.access_token, user_id, &form)
            .await?,
    ))
}

/// Delete a staff account.
#[instrument(skip(state, staff), fields(user_id = %user_id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(user_id): Path<UserId>,
) -> Result<Json<ApiMessage>> {
    Ok(Json(
        state
            .backend()
            .delete_staff(&staff.access_token, user_id)
            .await?,
    ))
}
