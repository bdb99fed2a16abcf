//! Wire types for the back-office surface.
//!
//! Field names mirror the backend's JSON; money fields ride as JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sphaerostyle_core::{
    CategoryId, ColorId, OrderId, OrderStatus, ProductDetailId, ProductId, SizeId, SubcategoryId,
    UserId,
};

// =============================================================================
// Catalog
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(default)]
    pub sub_category_id: Option<SubcategoryId>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductForm {
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    pub sub_category_id: SubcategoryId,
    #[serde(default)]
    pub description: Option<String>,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
}

/// Payload for creating or renaming a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryForm {
    pub category_name: String,
}

/// A subcategory nested under a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub sub_category_id: SubcategoryId,
    pub sub_category_name: String,
    pub category_id: CategoryId,
}

/// Payload for creating or updating a subcategory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryForm {
    pub sub_category_name: String,
    pub category_id: CategoryId,
}

/// A color attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub color_id: ColorId,
    pub color_name: String,
}

/// Payload for creating or renaming a color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorForm {
    pub color_name: String,
}

/// A size attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Size {
    pub size_id: SizeId,
    pub size_name: String,
}

/// Payload for creating or renaming a size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeForm {
    pub size_name: String,
}

/// A product variant with stock and images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product_detail_id: ProductDetailId,
    pub product_id: ProductId,
    #[serde(default)]
    pub color_id: Option<ColorId>,
    #[serde(default)]
    pub size_id: Option<SizeId>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Payload for creating or updating a variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetailForm {
    pub product_id: ProductId,
    #[serde(default)]
    pub color_id: Option<ColorId>,
    #[serde(default)]
    pub size_id: Option<SizeId>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

// =============================================================================
// Staff
// =============================================================================

/// A staff (or shopper) account as listed by the back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUser {
    pub user_id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role_id: i32,
}

/// Payload for creating a staff account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStaff {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role_id: i32,
}

/// Payload for updating a staff account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStaff {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: i32,
}

// =============================================================================
// Orders
// =============================================================================

/// One line of an order, as listed in the back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrderItem {
    pub product_id: ProductId,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub color: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub discount: Decimal,
}

/// An order with its lines, as listed in the back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrder {
    pub order_id: OrderId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub user_address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub items: Vec<AdminOrderItem>,
}

/// Order status change payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

// =============================================================================
// Misc
// =============================================================================

/// The signed-in staff profile plus bearer token, from the auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: StaffUser,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_update_wire_value() {
        let update = StatusUpdate {
            status: OrderStatus::Shipped,
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"status":"Shipped"}"#
        );
    }

    #[test]
    fn test_admin_order_defaults() {
        let order: AdminOrder =
            serde_json::from_str(r#"{"order_id":3,"total":20}"#).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.items.is_empty());
        assert!(order.created_at.is_none());
    }
}
