//! Core types for ShopApp.
//!
//! This module provides type-safe wrappers for the storefront domain.

pub mod email;
pub mod id;
pub mod money;
pub mod product;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::{DEFAULT_CURRENCY_SYMBOL, Money, format_amount, format_amount_with};
pub use product::{Category, Product, ProductError};
pub use status::*;
