//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding. All route handlers return `Result<T, AppError>`;
//! every failure leaves the flow in its prior stable state and is reported to
//! the client as JSON `{"error": ...}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::commerce::CommerceError;

/// Application-level error type for the storefront gateway.
#[derive(Debug, Error)]
pub enum AppError {
    /// Commerce backend operation failed.
    #[error("Commerce error: {0}")]
    Commerce(#[from] CommerceError),

    /// Checkout flow operation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Commerce(err) => commerce_status(err),
            Self::Checkout(err) => match err {
                CheckoutError::AddressRequired
                | CheckoutError::EmptyBag => StatusCode::BAD_REQUEST,
                CheckoutError::NoCheckout | CheckoutError::NoPaymentSession => {
                    StatusCode::NOT_FOUND
                }
                CheckoutError::SessionPending
                | CheckoutError::SessionAlreadyActive
                | CheckoutError::AlreadySubmitting
                | CheckoutError::Superseded => StatusCode::CONFLICT,
                CheckoutError::Commerce(err) => commerce_status(err),
            },
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    ///
    /// Backend messages are surfaced verbatim (the upstream contract already
    /// shapes them for users); only internal failures are masked.
    fn client_message(&self) -> String {
        match self {
            Self::Commerce(err) => err.to_string(),
            Self::Checkout(err) => err.to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Unauthorized(msg) | Self::BadRequest(msg) | Self::NotFound(msg) => msg.clone(),
        }
    }
}

/// Status for a backend failure: pass 4xx through, everything else is a bad
/// gateway from this service's point of view.
fn commerce_status(err: &CommerceError) -> StatusCode {
    match err {
        CommerceError::Unauthorized => StatusCode::UNAUTHORIZED,
        CommerceError::NotFound(_) => StatusCode::NOT_FOUND,
        CommerceError::Api { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(StatusCode::is_client_error)
            .unwrap_or(StatusCode::BAD_GATEWAY),
        CommerceError::Http(_) | CommerceError::Declined { .. } => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server-side errors to Sentry
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

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");
    }

    #[test]
    fn test_validation_failures_are_bad_requests() {
        assert_eq!(
            status_of(AppError::Checkout(CheckoutError::AddressRequired)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::BadRequest("Passwords do not match.".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_auth_is_unauthorized() {
        assert_eq!(
            status_of(AppError::Commerce(CommerceError::Unauthorized)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_backend_client_errors_pass_through() {
        let err = AppError::Commerce(CommerceError::Api {
            status: 422,
            message: "bad quantity".to_string(),
        });
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_backend_server_errors_become_bad_gateway() {
        let err = AppError::Commerce(CommerceError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(status_of(err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_duplicate_submission_is_conflict() {
        assert_eq!(
            status_of(AppError::Checkout(CheckoutError::AlreadySubmitting)),
            StatusCode::CONFLICT
        );
    }
}
