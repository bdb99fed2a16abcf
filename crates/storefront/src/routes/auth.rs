//! Authentication route handlers.
//!
//! Login and registration proxy the backend's credential endpoints; on
//! success the profile and bearer token land in the gateway session and
//! nowhere else.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use sphaerostyle_core::UserId;

use crate::commerce::types::{ApiMessage, RegisterRequest};
use crate::error::{AppError, Result};
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Signed-in profile view; the bearer token never leaves the session.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i32,
}

impl From<&CurrentUser> for ProfileView {
    fn from(user: &CurrentUser) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role_id: user.role_id,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Sign in against the backend and open a session.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<ProfileView>> {
    let response = state.commerce().login(&form.email, &form.password).await?;

    let user = CurrentUser::from(response);
    set_current_user(&session, &user)
        .await
        .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))?;

    Ok(Json(ProfileView::from(&user)))
}

/// Register a new account.
///
/// Password confirmation is checked here, before any backend call.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<RegisterForm>,
) -> Result<Json<ApiMessage>> {
    if form.password != form.confirm_password {
        return Err(AppError::BadRequest("Passwords do not match.".to_string()));
    }

    let ack = state
        .commerce()
        .register(&RegisterRequest {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: form.password,
        })
        .await?;
    Ok(Json(ack))
}

/// Sign out: clear the session, nothing else.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<ApiMessage>> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;
    Ok(Json(ApiMessage {
        message: Some("Signed out.".to_string()),
    }))
}
