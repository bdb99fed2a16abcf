//! Staff authentication handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use sphaerostyle_core::UserId;

use crate::backend::types::ApiMessage;
use crate::error::{AppError, Result};
use crate::middleware::{clear_current_staff, set_current_staff};
use crate::models::{CurrentStaff, session::STAFF_ROLE_ID};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signed-in staff profile view.
#[derive(Debug, Serialize)]
pub struct StaffView {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Sign in; only accounts with the staff role may open a session here.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<StaffView>> {
    let response = state.backend().login(&form.email, &form.password).await?;

    if response.user.role_id != STAFF_ROLE_ID {
        return Err(AppError::Unauthorized("Staff access only.".to_string()));
    }

    let staff = CurrentStaff {
        user_id: response.user.user_id,
        email: response.user.email,
        first_name: response.user.first_name,
        last_name: response.user.last_name,
        access_token: response.access_token,
    };
    set_current_staff(&session, &staff)
        .await
        .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))?;

    Ok(Json(StaffView {
        user_id: staff.user_id,
        email: staff.email,
        first_name: staff.first_name,
        last_name: staff.last_name,
    }))
}

/// Sign out.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<ApiMessage>> {
    clear_current_staff(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;
    Ok(Json(ApiMessage {
        message: Some("Signed out.".to_string()),
    }))
}
