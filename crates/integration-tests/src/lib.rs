//! Integration tests for ShopApp.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopapp-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Cart engine invariants and totals
//! - `storefront_flows` - Catalog, wishlist, orders and session together
//!
//! Shared fixtures live here so each test file builds products the same way.

#![cfg_attr(not(test), forbid(unsafe_code))]

use shopapp_core::{CategoryId, Money, Product, ProductId};

/// Build a valid product with the given id and price.
#[must_use]
pub fn product(id: &str, price: u64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Money::new(price),
        image: "https://via.placeholder.com/200".to_string(),
        category_id: CategoryId::new("1"),
        rating: 4.0,
        reviews: 10,
        description: String::new(),
    }
}
