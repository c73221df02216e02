//! Unified error handling.
//!
//! Each module has its own error enum; [`StorefrontError`] collects them so
//! session-level operations and front ends can return one type.

use thiserror::Error;

use shopapp_core::{EmailError, ProductId};

use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::orders::OrderError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Cart mutation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Catalog could not be built.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Order action was rejected.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Profile email is invalid.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// Product is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

impl StorefrontError {
    /// Returns true for errors caused by the caller's request rather than by
    /// broken data or configuration.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::Order(err) => err.is_user_error(),
            Self::Cart(_) | Self::Email(_) | Self::ProductNotFound(_) => true,
            Self::Catalog(_) | Self::Config(_) => false,
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
