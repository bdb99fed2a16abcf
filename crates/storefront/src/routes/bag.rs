//! Bag (cart) route handlers.
//!
//! The bag view joins cart lines with catalog data fetched concurrently and
//! merged by client-side lookup after all requests settle; there is no
//! ordering guarantee between the fetches if the catalog changes mid-flight.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use sphaerostyle_core::{
    AccessoryId, CartLineKey, DELIVERY_FEE, ProductId, discounted_unit_price, line_total,
    order_total,
};

use crate::commerce::types::{
    ApiMessage, CartLine, Color, NewCartLine, OrderItem, Product, ProductDetail, Size,
};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Display name for cart lines whose product has vanished from the catalog.
const UNKNOWN_PRODUCT: &str = "Unknown Product";

// =============================================================================
// Views
// =============================================================================

/// One bag line, enriched with catalog data.
#[derive(Debug, Clone, Serialize)]
pub struct BagLineView {
    pub product_id: ProductId,
    pub product_accessory_id: AccessoryId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub color_name: String,
    pub size_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

/// The assembled bag.
#[derive(Debug, Clone, Serialize)]
pub struct BagView {
    pub lines: Vec<BagLineView>,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl BagView {
    /// Snapshot the bag as order items (labels, not IDs).
    #[must_use]
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id,
                size: line.size_name.clone(),
                color: line.color_name.clone(),
                quantity: line.quantity,
                price: line.price,
                discount: line.discount,
            })
            .collect()
    }
}

// =============================================================================
// Assembly
// =============================================================================

/// Join cart lines against the catalog snapshots.
fn merge_bag(
    lines: Vec<CartLine>,
    products: &[Product],
    details: &[ProductDetail],
    colors: &[Color],
    sizes: &[Size],
) -> BagView {
    let views: Vec<BagLineView> = lines
        .into_iter()
        .map(|line| {
            let product = products.iter().find(|p| p.product_id == line.product_id);
            // First detail of the product carries the display image.
            let detail = details.iter().find(|d| d.product_id == line.product_id);
            let color_name = line
                .color_id
                .and_then(|id| colors.iter().find(|c| c.color_id == id))
                .map(|c| c.color_name.clone())
                .unwrap_or_default();
            let size_name = line
                .size_id
                .and_then(|id| sizes.iter().find(|s| s.size_id == id))
                .map(|s| s.size_name.clone())
                .unwrap_or_default();

            let name = product.map_or_else(
                || UNKNOWN_PRODUCT.to_string(),
                |p| p.product_name.clone(),
            );
            let discount = product.map_or(Decimal::ZERO, |p| p.discount);

            BagLineView {
                product_id: line.product_id,
                product_accessory_id: line.product_accessory_id,
                name,
                image: detail.and_then(|d| d.image_urls.first().cloned()),
                color_name,
                size_name,
                quantity: line.quantity,
                price: line.price,
                discount,
                unit_price: discounted_unit_price(line.price, discount),
                line_total: line_total(line.price, discount, line.quantity),
            }
        })
        .collect();

    let subtotal: Decimal = views.iter().map(|v| v.line_total).sum();

    BagView {
        lines: views,
        subtotal,
        delivery_fee: DELIVERY_FEE,
        total: order_total(subtotal),
    }
}

/// Fetch everything the bag needs and merge it.
///
/// The five reads run concurrently and are not ordered against each other.
pub async fn assemble_bag(state: &AppState, token: &str) -> Result<BagView> {
    let commerce = state.commerce();
    let (lines, products, details, colors, sizes) = tokio::try_join!(
        commerce.cart_lines(token),
        commerce.products(),
        commerce.product_details(),
        commerce.colors(),
        commerce.sizes(),
    )
    .map_err(AppError::from)?;

    Ok(merge_bag(lines, &products, &details, &colors, &sizes))
}

// =============================================================================
// Request Types
// =============================================================================

/// Quantity update request.
#[derive(Debug, Deserialize)]
pub struct UpdateBagItem {
    pub product_id: ProductId,
    pub product_accessory_id: AccessoryId,
    pub quantity: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the assembled bag.
#[instrument(skip(state, user))]
pub async fn show(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Result<Json<BagView>> {
    let bag = assemble_bag(&state, &user.access_token).await?;
    Ok(Json(bag))
}

/// Add a line to the bag.
#[instrument(skip(state, user, line))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(line): Json<NewCartLine>,
) -> Result<Json<ApiMessage>> {
    let ack = state
        .commerce()
        .add_to_cart(&user.access_token, &line)
        .await?;
    Ok(Json(ack))
}

/// Set the quantity of a bag line.
#[instrument(skip(state, user))]
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(form): Json<UpdateBagItem>,
) -> Result<Json<ApiMessage>> {
    if form.quantity < 1 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1.".to_string(),
        ));
    }

    let key = CartLineKey::new(form.product_id, form.product_accessory_id);
    let ack = state
        .commerce()
        .update_quantity(&user.access_token, key, form.quantity)
        .await?;
    Ok(Json(ack))
}

/// Remove a line from the bag.
#[instrument(skip(state, user))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(key): Json<CartLineKey>,
) -> Result<Json<ApiMessage>> {
    let ack = state
        .commerce()
        .remove_from_cart(&user.access_token, key)
        .await?;
    Ok(Json(ack))
}

/// Whether the bag holds any line for the given product.
#[instrument(skip(state, user))]
pub async fn contains(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(product_id): Path<ProductId>,
) -> Result<Json<bool>> {
    let present = state
        .commerce()
        .cart_contains(&user.access_token, product_id)
        .await?;
    Ok(Json(present))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sphaerostyle_core::{ColorId, ProductDetailId, SizeId};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn catalog() -> (Vec<Product>, Vec<ProductDetail>, Vec<Color>, Vec<Size>) {
        let products = vec![Product {
            product_id: ProductId::new(7),
            product_name: "Linen Shirt".to_string(),
            price: dec("10"),
            discount: dec("10"),
            sub_category_id: None,
            description: None,
        }];
        let details = vec![ProductDetail {
            product_detail_id: ProductDetailId::new(1),
            product_id: ProductId::new(7),
            product_accessory_id: Some(AccessoryId::new(1)),
            color_id: Some(ColorId::new(3)),
            size_id: Some(SizeId::new(2)),
            price: dec("10"),
            quantity: 4,
            image_urls: vec!["https://img/1.jpg".to_string()],
        }];
        let colors = vec![Color {
            color_id: ColorId::new(3),
            color_name: "#12372A".to_string(),
        }];
        let sizes = vec![Size {
            size_id: SizeId::new(2),
            size_name: "M".to_string(),
        }];
        (products, details, colors, sizes)
    }

    fn line(quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(7),
            product_accessory_id: AccessoryId::new(1),
            size_id: Some(SizeId::new(2)),
            color_id: Some(ColorId::new(3)),
            quantity,
            price: dec("10"),
        }
    }

    #[test]
    fn test_merge_bag_worked_example() {
        // price 10, discount 10%, quantity 2 -> subtotal 18, total 20
        let (products, details, colors, sizes) = catalog();
        let bag = merge_bag(vec![line(2)], &products, &details, &colors, &sizes);

        assert_eq!(bag.lines.len(), 1);
        let first = bag.lines.first().unwrap();
        assert_eq!(first.name, "Linen Shirt");
        assert_eq!(first.color_name, "#12372A");
        assert_eq!(first.size_name, "M");
        assert_eq!(first.unit_price, dec("9"));
        assert_eq!(first.line_total, dec("18"));
        assert_eq!(bag.subtotal, dec("18"));
        assert_eq!(bag.total, dec("20.00"));
    }

    #[test]
    fn test_merge_bag_unknown_product() {
        let bag = merge_bag(vec![line(1)], &[], &[], &[], &[]);
        let first = bag.lines.first().unwrap();
        assert_eq!(first.name, UNKNOWN_PRODUCT);
        assert_eq!(first.discount, Decimal::ZERO);
        assert_eq!(first.color_name, "");
        assert!(first.image.is_none());
        // No discount: full price.
        assert_eq!(bag.subtotal, dec("10"));
    }

    #[test]
    fn test_merge_bag_empty() {
        let bag = merge_bag(vec![], &[], &[], &[], &[]);
        assert!(bag.lines.is_empty());
        assert_eq!(bag.subtotal, Decimal::ZERO);
        assert_eq!(bag.total, dec("2.00"));
    }

    #[test]
    fn test_order_items_carry_labels_and_prices() {
        let (products, details, colors, sizes) = catalog();
        let bag = merge_bag(vec![line(2)], &products, &details, &colors, &sizes);
        let items = bag.order_items();

        assert_eq!(items.len(), 1);
        let item = items.first().unwrap();
        assert_eq!(item.product_id, ProductId::new(7));
        assert_eq!(item.size, "M");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, dec("10"));
        assert_eq!(item.discount, dec("10"));
    }
}
