//! Checkout route handlers.
//!
//! Thin layer over the [`CheckoutRegistry`](crate::checkout::CheckoutRegistry):
//! the open handler resolves the selected address and snapshots the bag; the
//! rest delegate straight to the controller.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use sphaerostyle_core::{AddressId, PaymentMethod};

use crate::checkout::{CheckoutError, CheckoutStatus, CheckoutSummary, MethodOutcome, PaymentReceipt};
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::state::AppState;

use super::bag::assemble_bag;

/// Checkout open request: which saved address to deliver to.
#[derive(Debug, Deserialize)]
pub struct OpenCheckout {
    pub address_id: Option<AddressId>,
}

/// Payment method selection request.
#[derive(Debug, Deserialize)]
pub struct SelectMethod {
    pub method: PaymentMethod,
}

/// Open a checkout flow.
///
/// Refuses before any backend call when no address is selected. Otherwise the
/// address is flattened, the bag snapshotted, and the total locked.
#[instrument(skip(state, user, form))]
pub async fn open(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<OpenCheckout>,
) -> Result<Json<CheckoutSummary>> {
    // Address guard comes first: a checkout without a selected address must
    // not issue a single backend call.
    let Some(address_id) = form.address_id else {
        return Err(CheckoutError::AddressRequired.into());
    };

    let addresses = state
        .commerce()
        .addresses(&user.access_token, user.user_id)
        .await?;
    let address = addresses
        .iter()
        .find(|a| a.user_address_id == address_id)
        .ok_or(CheckoutError::AddressRequired)?;
    let user_address = address.flattened();

    let bag = assemble_bag(&state, &user.access_token).await?;

    let summary = state
        .checkout()
        .open(&user, user_address, bag.order_items(), bag.subtotal)
        .await?;
    Ok(Json(summary))
}

/// Choose a payment method.
#[instrument(skip(state, user))]
pub async fn select_method(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<SelectMethod>,
) -> Result<Json<MethodOutcome>> {
    let outcome = state
        .checkout()
        .select_method(user.user_id, form.method)
        .await?;
    Ok(Json(outcome))
}

/// Current flow state and countdown for the payment popup.
#[instrument(skip(state, user))]
pub async fn session(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Json<CheckoutStatus> {
    Json(state.checkout().status(user.user_id).await)
}

/// Submit the order for the live payment session.
#[instrument(skip(state, user))]
pub async fn pay(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<(StatusCode, Json<PaymentReceipt>)> {
    let receipt = state.checkout().pay(user.user_id).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Close the flow, discarding any live session.
#[instrument(skip(state, user))]
pub async fn close(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> StatusCode {
    state.checkout().close(user.user_id).await;
    StatusCode::NO_CONTENT
}
