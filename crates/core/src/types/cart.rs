//! Cart line identity.

use serde::{Deserialize, Serialize};

use super::id::{AccessoryId, ProductId};

/// Composite identity of a cart line.
///
/// The backend keys cart lines on `(product_id, product_accessory_id)` for
/// update and delete calls. The key deliberately carries no size or color, so
/// two variants of the same product collapse onto one line. This matches the
/// upstream contract and must not be "fixed" here without a backend change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartLineKey {
    pub product_id: ProductId,
    pub product_accessory_id: AccessoryId,
}

impl CartLineKey {
    /// Create a new cart line key.
    #[must_use]
    pub const fn new(product_id: ProductId, product_accessory_id: AccessoryId) -> Self {
        Self {
            product_id,
            product_accessory_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_variant() {
        // Same product and accessory, regardless of which size/color the
        // caller had in hand, is the same line.
        let a = CartLineKey::new(ProductId::new(7), AccessoryId::new(1));
        let b = CartLineKey::new(ProductId::new(7), AccessoryId::new(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_wire_field_names() {
        let key = CartLineKey::new(ProductId::new(7), AccessoryId::new(3));
        let json = serde_json::to_value(key).unwrap();
        assert_eq!(json["product_id"], 7);
        assert_eq!(json["product_accessory_id"], 3);
    }
}
