//! ShopApp Core - Shared storefront types.
//!
//! This crate provides the value types used across all ShopApp components:
//! - `storefront` - Cart engine, catalog, wishlist and order history
//! - `cli` - Command-line front end driving a storefront session
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no global
//! state. Everything here is a plain value that can be cloned, compared and
//! serialized.
//!
//! # Modules
//!
//! - [`types`] - String IDs, integer money and price formatting, products,
//!   categories, email addresses and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
