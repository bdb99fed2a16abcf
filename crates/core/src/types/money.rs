//! Money arithmetic for cart and order totals.
//!
//! All amounts are USD and carried as [`Decimal`] to avoid float rounding in
//! totals. The backend speaks plain JSON numbers; wire structs in the service
//! crates opt into float (de)serialization per field.

use rust_decimal::Decimal;

/// Flat delivery fee added to every order, in USD.
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(200, 0, 0, false, 2);

/// Unit price after applying a percentage discount.
///
/// `price × (1 − discount/100)`. A discount of zero returns the price
/// unchanged; 100 returns zero.
#[must_use]
pub fn discounted_unit_price(price: Decimal, discount_percent: Decimal) -> Decimal {
    price - price * discount_percent / Decimal::ONE_HUNDRED
}

/// Total for one cart line: discounted unit price times quantity.
#[must_use]
pub fn line_total(price: Decimal, discount_percent: Decimal, quantity: u32) -> Decimal {
    discounted_unit_price(price, discount_percent) * Decimal::from(quantity)
}

/// Order total: subtotal plus the flat delivery fee.
///
/// Computed once when checkout opens and not recomputed afterwards; cart
/// mutations during an open checkout do not move the submitted total.
#[must_use]
pub fn order_total(subtotal: Decimal) -> Decimal {
    subtotal + DELIVERY_FEE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_delivery_fee_is_two_dollars() {
        assert_eq!(DELIVERY_FEE, dec("2.00"));
    }

    #[test]
    fn test_discounted_unit_price() {
        assert_eq!(discounted_unit_price(dec("10"), dec("10")), dec("9.0"));
        assert_eq!(discounted_unit_price(dec("19.99"), dec("0")), dec("19.99"));
        assert_eq!(discounted_unit_price(dec("50"), dec("100")), dec("0"));
    }

    #[test]
    fn test_line_total() {
        // price 10, 10% off, quantity 2 -> 18.00
        assert_eq!(line_total(dec("10"), dec("10"), 2), dec("18.0"));
        assert_eq!(line_total(dec("5.50"), dec("0"), 3), dec("16.50"));
    }

    #[test]
    fn test_order_total_worked_example() {
        // One line: price 10, discount 10, quantity 2 -> subtotal 18, total 20
        let subtotal = line_total(dec("10"), dec("10"), 2);
        assert_eq!(order_total(subtotal), dec("20.0"));
    }

    #[test]
    fn test_order_total_empty_cart() {
        assert_eq!(order_total(Decimal::ZERO), dec("2.00"));
    }
}
