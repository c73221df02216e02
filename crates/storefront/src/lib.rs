//! ShopApp Storefront library.
//!
//! The storefront engine behind the shopping screens: a cart that merges by
//! product and derives integer totals, plus the catalog, wishlist, order
//! history and session that call into it. Everything is in memory; nothing
//! is persisted.
//!
//! # Example
//!
//! ```
//! use shopapp_core::{Money, ProductId};
//! use shopapp_storefront::{Catalog, Session, StorefrontConfig};
//!
//! let catalog = Catalog::demo()?;
//! let mut session = Session::new(StorefrontConfig::default());
//!
//! let phone = catalog.product(&ProductId::new("1")).expect("demo product");
//! let earbuds = catalog.product(&ProductId::new("3")).expect("demo product");
//! session.add_to_cart(phone, 1)?;
//! session.add_to_cart(earbuds, 2)?;
//!
//! let summary = session.summary();
//! assert_eq!(summary.subtotal, Money::new(14_170_000));
//! assert_eq!(summary.total.to_string(), "14.200.000 đ");
//! # Ok::<(), shopapp_storefront::StorefrontError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod orders;
pub mod profile;
pub mod session;
pub mod shared;
pub mod wishlist;

pub use cart::{CartError, CartStore, LineItem};
pub use catalog::{Catalog, CatalogDocument, CatalogError};
pub use checkout::{CheckoutIntent, CheckoutStatus, CheckoutSummary};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use orders::{Order, OrderError, OrderHistory, OrderLine};
pub use profile::{Preference, Preferences, Profile};
pub use session::Session;
pub use shared::SharedCart;
pub use wishlist::Wishlist;
