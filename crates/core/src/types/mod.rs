//! Core types for Sphaerostyle.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod money;
pub mod payment;
pub mod status;

pub use cart::CartLineKey;
pub use id::*;
pub use money::{DELIVERY_FEE, discounted_unit_price, line_total, order_total};
pub use payment::PaymentMethod;
pub use status::{AddressStatus, OrderStatus};
