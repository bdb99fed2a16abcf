//! Wire types for the commerce REST backend.
//!
//! Field names mirror the backend's JSON exactly. Money fields ride as JSON
//! numbers, so they opt into float (de)serialization while staying `Decimal`
//! in memory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sphaerostyle_core::{
    AccessoryId, AddressId, AddressStatus, CartLineKey, CategoryId, ColorId, OrderId, OrderStatus,
    ProductDetailId, ProductId, SizeId, SubcategoryId, UserId,
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
    /// Percentage discount applied to the list price.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(default)]
    pub sub_category_id: Option<SubcategoryId>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A product variant: one (color, size) combination with its own stock,
/// price and images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product_detail_id: ProductDetailId,
    pub product_id: ProductId,
    #[serde(default)]
    pub product_accessory_id: Option<AccessoryId>,
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

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
}

/// A subcategory nested under a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub sub_category_id: SubcategoryId,
    pub sub_category_name: String,
    pub category_id: CategoryId,
}

/// A color attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub color_id: ColorId,
    pub color_name: String,
}

/// A size attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Size {
    pub size_id: SizeId,
    pub size_name: String,
}

// =============================================================================
// Cart & Favorites
// =============================================================================

/// A cart line as stored by the backend.
///
/// Identity is `(product_id, product_accessory_id)`; size and color are
/// attributes of the line, not part of its key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub product_accessory_id: AccessoryId,
    #[serde(default)]
    pub size_id: Option<SizeId>,
    #[serde(default)]
    pub color_id: Option<ColorId>,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl CartLine {
    /// The line's composite identity.
    #[must_use]
    pub const fn key(&self) -> CartLineKey {
        CartLineKey::new(self.product_id, self.product_accessory_id)
    }
}

/// Payload for adding a line to the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCartLine {
    pub product_id: ProductId,
    pub product_accessory_id: AccessoryId,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub size_id: Option<SizeId>,
    #[serde(default)]
    pub color_id: Option<ColorId>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub discount: Decimal,
}

/// A favorited product reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub product_id: ProductId,
    pub product_accessory_id: AccessoryId,
}

// =============================================================================
// Addresses
// =============================================================================

/// A saved delivery address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub user_address_id: AddressId,
    pub user_id: UserId,
    pub username: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub status: AddressStatus,
}

impl Address {
    /// Flatten to the single-line form orders carry:
    /// `"name, phone, address, city, country"`.
    #[must_use]
    pub fn flattened(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.username, self.phone_number, self.address, self.city, self.country
        )
    }
}

/// Payload for creating an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAddress {
    pub user_id: UserId,
    pub username: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub status: AddressStatus,
}

/// Payload for updating an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAddress {
    pub username: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub status: AddressStatus,
}

// =============================================================================
// Orders
// =============================================================================

/// One line of a submitted order. Size and color travel as display labels,
/// not IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
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

/// Payload for creating an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    /// Flattened delivery address string.
    pub user_address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Display label of the chosen payment method (e.g. "ABA PAY").
    pub payment_method: String,
    pub items: Vec<OrderItem>,
}

/// An order as returned by the history endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
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
    pub items: Vec<OrderItem>,
}

// =============================================================================
// Auth & Profile
// =============================================================================

/// The signed-in user's profile as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role_id: i32,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Successful login response: profile plus bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: AuthUser,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Payload for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Payload for updating the signed-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Generic `{"message": ...}` acknowledgement used by several endpoints.
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
    fn test_address_flattened() {
        let addr = Address {
            user_address_id: AddressId::new(1),
            user_id: UserId::new(9),
            username: "A".to_string(),
            phone_number: "1".to_string(),
            address: "X".to_string(),
            city: "Y".to_string(),
            country: "Cambodia".to_string(),
            status: AddressStatus::Default,
        };
        assert_eq!(addr.flattened(), "A, 1, X, Y, Cambodia");
    }

    #[test]
    fn test_cart_line_parses_numeric_price() {
        let line: CartLine = serde_json::from_str(
            r#"{"product_id":7,"product_accessory_id":1,"size_id":2,"color_id":3,"quantity":2,"price":10}"#,
        )
        .unwrap();
        assert_eq!(line.price, Decimal::from(10));
        assert_eq!(line.key().product_id, ProductId::new(7));
    }

    #[test]
    fn test_new_order_serializes_total_as_number() {
        let order = NewOrder {
            user_address: "A, 1, X, Y, Cambodia".to_string(),
            total: Decimal::new(2000, 2),
            payment_method: "ABA PAY".to_string(),
            items: vec![],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert!(json["total"].is_number());
        assert!((json["total"].as_f64().unwrap() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_login_response_token_field_name() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"user":{"user_id":1,"email":"a@b.c","role_id":2},"accessToken":"tok"}"#,
        )
        .unwrap();
        assert_eq!(resp.access_token, "tok");
        assert_eq!(resp.user.user_id, UserId::new(1));
    }
}
