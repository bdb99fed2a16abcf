//! Staff authentication extractor.
//!
//! Role gating happens at login (only the staff role may open a session
//! here); the extractor just requires a live staff session.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentStaff, session_keys};

/// Extractor that requires a signed-in staff member.
pub struct RequireStaff(pub CurrentStaff);

/// Rejection returned when no staff session is present.
pub struct StaffRejection;

impl IntoResponse for StaffRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Staff sign-in required." })),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for RequireStaff
where
    S: Send + Sync,
{
    type Rejection = StaffRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().ok_or(StaffRejection)?;

        let staff: CurrentStaff = session
            .get(session_keys::CURRENT_STAFF)
            .await
            .ok()
            .flatten()
            .ok_or(StaffRejection)?;

        Ok(Self(staff))
    }
}

/// Helper to set the signed-in staff member in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_staff(
    session: &Session,
    staff: &CurrentStaff,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_STAFF, staff).await
}

/// Helper to clear the staff session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_staff(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentStaff>(session_keys::CURRENT_STAFF)
        .await?;
    Ok(())
}
