//! Thread-safe cart handle.
//!
//! [`SharedCart`] serializes every cart operation through one mutex, so
//! quantity read-modify-write from interleaved handlers never races. No
//! [`CartStore`] operation can leave half-applied state, so a poisoned lock
//! is recovered rather than surfaced.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopapp_core::{Money, Product, ProductId};

use crate::cart::{CartError, CartStore, LineItem};

/// A cheaply clonable handle to one cart shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<CartStore>>,
}

impl SharedCart {
    /// Create a handle to a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing cart.
    #[must_use]
    pub fn from_store(store: CartStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`CartStore::add_item`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] for a quantity below one, or
    /// [`CartError::TotalOverflow`] if the subtotal would not fit.
    pub fn add_item(&self, product: &Product, quantity: i64) -> Result<(), CartError> {
        self.lock().add_item(product, quantity)
    }

    /// See [`CartStore::remove_item`].
    pub fn remove_item(&self, product_id: &ProductId) -> bool {
        self.lock().remove_item(product_id)
    }

    /// See [`CartStore::set_quantity`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] for a positive quantity on a
    /// product that has no line.
    pub fn set_quantity(&self, product_id: &ProductId, quantity: i64) -> Result<(), CartError> {
        self.lock().set_quantity(product_id, quantity)
    }

    /// See [`CartStore::adjust_quantity`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if the product has no line.
    pub fn adjust_quantity(&self, product_id: &ProductId, delta: i64) -> Result<(), CartError> {
        self.lock().adjust_quantity(product_id, delta)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Run a closure against a consistent view of the cart.
    pub fn with<R>(&self, f: impl FnOnce(&CartStore) -> R) -> R {
        f(&self.lock())
    }

    /// Owned copy of the current lines.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.lock().line_items().to_vec()
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lock().item_count()
    }

    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lock().subtotal()
    }

    #[must_use]
    pub fn total(&self, shipping_fee: Money) -> Money {
        self.lock().total(shipping_fee)
    }
}
