//! Payment method catalog.
//!
//! The chooser offers a fixed set of methods. Only ABA PAY is backed by a
//! QR payment session with a validity window; the card method hands off to a
//! hosted page, and the remaining methods are routed to external handlers.

use serde::{Deserialize, Serialize};

/// A payment method offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    AbaPay,
    Cards,
    Khqr,
    Alipay,
    Wechat,
}

impl PaymentMethod {
    /// All methods, in the order the chooser lists them.
    pub const ALL: [Self; 5] = [
        Self::AbaPay,
        Self::Cards,
        Self::Khqr,
        Self::Alipay,
        Self::Wechat,
    ];

    /// Wire tag sent to the payment gateway as `payment_option`.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::AbaPay => "abapay",
            Self::Cards => "cards",
            Self::Khqr => "khqr",
            Self::Alipay => "alipay",
            Self::Wechat => "wechat",
        }
    }

    /// Display label, also recorded on submitted orders as `payment_method`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AbaPay => "ABA PAY",
            Self::Cards => "Credit/Debit Card",
            Self::Khqr => "KHQR",
            Self::Alipay => "Alipay",
            Self::Wechat => "WeChat",
        }
    }

    /// Short description shown under the label in the chooser.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AbaPay => "Scan to pay with ABA Mobile",
            Self::Cards => "Visa / MasterCard / JCB",
            Self::Khqr => "Scan to pay with member bank app",
            Self::Alipay => "Scan to pay with Alipay",
            Self::Wechat => "Scan to pay with WeChat",
        }
    }

    /// Whether selecting this method opens a QR payment session with a
    /// countdown window.
    #[must_use]
    pub const fn is_qr_session(&self) -> bool {
        matches!(self, Self::AbaPay)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abapay" => Ok(Self::AbaPay),
            "cards" => Ok(Self::Cards),
            "khqr" => Ok(Self::Khqr),
            "alipay" => Ok(Self::Alipay),
            "wechat" => Ok(Self::Wechat),
            _ => Err(format!("unknown payment method: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_only_aba_is_qr_backed() {
        let qr: Vec<_> = PaymentMethod::ALL
            .iter()
            .filter(|m| m.is_qr_session())
            .collect();
        assert_eq!(qr, vec![&PaymentMethod::AbaPay]);
    }

    #[test]
    fn test_tag_roundtrip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_str(method.tag()).unwrap(), method);
        }
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&PaymentMethod::AbaPay).unwrap();
        assert_eq!(json, "\"abapay\"");
        let back: PaymentMethod = serde_json::from_str("\"wechat\"").unwrap();
        assert_eq!(back, PaymentMethod::Wechat);
    }

    #[test]
    fn test_order_label() {
        assert_eq!(PaymentMethod::AbaPay.label(), "ABA PAY");
    }
}
