//! Sphaerostyle Core - Shared types library.
//!
//! This crate provides common types used across all Sphaerostyle components:
//! - `storefront` - Public-facing storefront gateway
//! - `admin` - Internal back-office gateway
//! - `cli` - Command-line operator tools
//!
//! # Architecture
//!
//! The core crate contains only types and arithmetic - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money arithmetic, statuses, payment methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
