//! Status enums for orders and delivery addresses.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Order fulfillment status as managed from the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status an order can be moved to.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Processing" => Ok(Self::Processing),
            "Shipped" => Ok(Self::Shipped),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Delivery address flag.
///
/// The backend marks the pre-selected address with the literal string
/// `"default"`; anything else (including the empty string) is a regular
/// address. At most one default per user, enforced by a pre-submit check on
/// the client side rather than atomically by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressStatus {
    Default,
    #[default]
    Regular,
}

impl AddressStatus {
    /// Whether this is the user's default delivery address.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl Serialize for AddressStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Default => serializer.serialize_str("default"),
            Self::Regular => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for AddressStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("default") => Self::Default,
            _ => Self::Regular,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_order_status_roundtrip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str(&status.to_string()).unwrap(), status);
        }
    }

    #[test]
    fn test_order_status_rejects_unknown() {
        assert!(OrderStatus::from_str("Lost").is_err());
    }

    #[test]
    fn test_address_status_wire_values() {
        let default: AddressStatus = serde_json::from_str("\"default\"").unwrap();
        assert!(default.is_default());

        let empty: AddressStatus = serde_json::from_str("\"\"").unwrap();
        assert!(!empty.is_default());

        let null: AddressStatus = serde_json::from_str("null").unwrap();
        assert!(!null.is_default());

        assert_eq!(
            serde_json::to_string(&AddressStatus::Default).unwrap(),
            "\"default\""
        );
    }
}
