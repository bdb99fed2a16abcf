//! Unified error handling for the admin gateway, with Sentry capture.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::BackendError;

/// Application-level error type for the admin gateway.
#[derive(Debug, Error)]
pub enum AppError {
    /// Back-office backend operation failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// User is not signed in as staff.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from the console.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Backend(err) => match err {
                BackendError::Unauthorized => StatusCode::UNAUTHORIZED,
                BackendError::NotFound(_) => StatusCode::NOT_FOUND,
                BackendError::Api { status, .. } => StatusCode::from_u16(*status)
                    .ok()
                    .filter(StatusCode::is_client_error)
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                BackendError::Http(_) => StatusCode::BAD_GATEWAY,
            },
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Backend(err) => err.to_string(),
            Self::Unauthorized(msg) | Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        (
            status,
            Json(serde_json::json!({ "error": self.client_message() })),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status() {
        let response = AppError::Unauthorized("Staff access only.".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_message_is_masked() {
        let err = AppError::Internal("connection pool exploded".to_string());
        assert_eq!(err.client_message(), "Internal server error");
    }
}
