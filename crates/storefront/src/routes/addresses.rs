//! Delivery address route handlers.
//!
//! The two address invariants - at most five addresses, at most one default -
//! are checked here against a fresh list before each submission; the backend
//! does not enforce them atomically.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use sphaerostyle_core::{AddressId, AddressStatus};

use crate::commerce::types::{Address, ApiMessage, NewAddress, UpdateAddress};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Maximum number of saved addresses per user.
const MAX_ADDRESSES: usize = 5;

/// Address form fields shared by create and update.
#[derive(Debug, Deserialize)]
pub struct AddressForm {
    pub username: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub status: AddressStatus,
}

fn default_country() -> String {
    "Cambodia".to_string()
}

impl AddressForm {
    /// Reject blank required fields before any backend call.
    fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty()
            || self.phone_number.trim().is_empty()
            || self.address.trim().is_empty()
            || self.city.trim().is_empty()
        {
            return Err(AppError::BadRequest("Please fill in all fields.".to_string()));
        }
        Ok(())
    }
}

/// Whether another address already holds the default flag.
fn other_default_exists(addresses: &[Address], editing: Option<AddressId>) -> bool {
    addresses
        .iter()
        .any(|a| a.status.is_default() && editing != Some(a.user_address_id))
}

/// List the signed-in user's addresses.
#[instrument(skip(state, user))]
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<Address>>> {
    let addresses = state
        .commerce()
        .addresses(&user.access_token, user.user_id)
        .await?;
    Ok(Json(addresses))
}

/// Create an address.
#[instrument(skip(state, user, form))]
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<AddressForm>,
) -> Result<Json<ApiMessage>> {
    form.validate()?;

    let existing = state
        .commerce()
        .addresses(&user.access_token, user.user_id)
        .await?;
    if existing.len() >= MAX_ADDRESSES {
        return Err(AppError::BadRequest(format!(
            "You can only have up to {MAX_ADDRESSES} addresses."
        )));
    }
    if form.status.is_default() && other_default_exists(&existing, None) {
        return Err(AppError::BadRequest(
            "You already have a default address. Only one default allowed.".to_string(),
        ));
    }

    let ack = state
        .commerce()
        .create_address(
            &user.access_token,
            &NewAddress {
                user_id: user.user_id,
                username: form.username,
                phone_number: form.phone_number,
                address: form.address,
                city: form.city,
                country: form.country,
                status: form.status,
            },
        )
        .await?;
    Ok(Json(ack))
}

/// Update an address.
#[instrument(skip(state, user, form), fields(address_id = %address_id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(address_id): Path<AddressId>,
    Json(form): Json<AddressForm>,
) -> Result<Json<ApiMessage>> {
    form.validate()?;

    if form.status.is_default() {
        let existing = state
            .commerce()
            .addresses(&user.access_token, user.user_id)
            .await?;
        if other_default_exists(&existing, Some(address_id)) {
            return Err(AppError::BadRequest(
                "You already have a default address. Only one default allowed.".to_string(),
            ));
        }
    }

    let ack = state
        .commerce()
        .update_address(
            &user.access_token,
            address_id,
            &UpdateAddress {
                username: form.username,
                phone_number: form.phone_number,
                address: form.address,
                city: form.city,
                country: form.country,
                status: form.status,
            },
        )
        .await?;
    Ok(Json(ack))
}

/// Delete an address.
#[instrument(skip(state, user), fields(address_id = %address_id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(address_id): Path<AddressId>,
) -> Result<Json<ApiMessage>> {
    let ack = state
        .commerce()
        .delete_address(&user.access_token, address_id)
        .await?;
    Ok(Json(ack))
}

/// Flag an address as the default, provided no other address holds the flag.
#[instrument(skip(state, user), fields(address_id = %address_id))]
pub async fn set_default(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(address_id): Path<AddressId>,
) -> Result<Json<ApiMessage>> {
    let existing = state
        .commerce()
        .addresses(&user.access_token, user.user_id)
        .await?;
    if other_default_exists(&existing, Some(address_id)) {
        return Err(AppError::BadRequest(
            "You already have a default address.".to_string(),
        ));
    }

    let ack = state
        .commerce()
        .set_default_address(&user.access_token, address_id, user.user_id)
        .await?;
    Ok(Json(ack))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sphaerostyle_core::UserId;

    fn addr(id: i32, status: AddressStatus) -> Address {
        Address {
            user_address_id: AddressId::new(id),
            user_id: UserId::new(1),
            username: "A".to_string(),
            phone_number: "1".to_string(),
            address: "X".to_string(),
            city: "Y".to_string(),
            country: "Cambodia".to_string(),
            status,
        }
    }

    #[test]
    fn test_other_default_exists() {
        let addresses = vec![addr(1, AddressStatus::Default), addr(2, AddressStatus::Regular)];

        // Creating a second default is blocked.
        assert!(other_default_exists(&addresses, None));
        // Editing the current default does not count against itself.
        assert!(!other_default_exists(&addresses, Some(AddressId::new(1))));
        // Editing another address still sees the default.
        assert!(other_default_exists(&addresses, Some(AddressId::new(2))));
    }

    #[test]
    fn test_form_validation_rejects_blank_fields() {
        let form = AddressForm {
            username: " ".to_string(),
            phone_number: "1".to_string(),
            address: "X".to_string(),
            city: "Y".to_string(),
            country: "Cambodia".to_string(),
            status: AddressStatus::Regular,
        };
        assert!(form.validate().is_err());
    }
}
