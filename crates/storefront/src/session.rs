//! Shopping session.
//!
//! A [`Session`] is the explicit owner of one cart, one wishlist and the
//! signed-in profile. Front ends create one per user session and pass it to
//! whatever needs it; there is no global cart.

use tracing::{info, instrument};

use shopapp_core::{Money, OrderId, Product, ProductId};

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutIntent, CheckoutSummary};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::orders::OrderHistory;
use crate::profile::{Preferences, Profile};
use crate::wishlist::Wishlist;

/// One customer's in-memory shopping state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: StorefrontConfig,
    cart: CartStore,
    wishlist: Wishlist,
    preferences: Preferences,
    profile: Option<Profile>,
}

impl Session {
    /// Start an anonymous session with an empty cart.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn shipping_fee(&self) -> Money {
        self.config.shipping_fee
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut Wishlist {
        &mut self.wishlist
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub const fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }

    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Add a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Cart`] for a quantity below one.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> Result<()> {
        self.cart.add_item(product, quantity)?;
        Ok(())
    }

    /// Add one unit of a favourite product to the cart.
    ///
    /// The product is looked up in the catalog so the current price is used.
    /// The wishlist entry stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ProductNotFound`] if the product is not a
    /// favourite or no longer in the catalog.
    pub fn wishlist_to_cart(&mut self, product_id: &ProductId, catalog: &Catalog) -> Result<()> {
        let product = self
            .wishlist
            .contains(product_id)
            .then(|| catalog.product(product_id))
            .flatten()
            .ok_or_else(|| StorefrontError::ProductNotFound(product_id.clone()))?;

        self.cart.add_item(product, 1)?;
        Ok(())
    }

    /// Add a delivered order's items to the cart again.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Order`] if the order is unknown, not
    /// delivered, or references products missing from the catalog.
    pub fn reorder(
        &mut self,
        history: &OrderHistory,
        order_id: &OrderId,
        catalog: &Catalog,
    ) -> Result<usize> {
        Ok(history.reorder(order_id, catalog, &mut self.cart)?)
    }

    /// Cart figures with the configured shipping fee.
    #[must_use]
    pub fn summary(&self) -> CheckoutSummary {
        CheckoutSummary::of(&self.cart, self.config.shipping_fee)
    }

    /// Request checkout. Payment is not available, so this only reports the
    /// summary; the cart is left as it is.
    #[instrument(skip(self))]
    pub fn checkout(&self) -> CheckoutIntent {
        let intent = CheckoutIntent::for_cart(&self.cart, self.config.shipping_fee);
        info!(
            status = ?intent.status,
            total = intent.summary.total.amount(),
            "Checkout requested"
        );
        intent
    }

    /// Sign in. Cart and wishlist carry over from the anonymous session.
    pub fn login(&mut self, profile: Profile) {
        info!(email = %profile.email, "Signed in");
        self.profile = Some(profile);
    }

    /// Sign out, clearing the cart, the wishlist and the profile.
    ///
    /// Preferences are device settings and are kept.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        self.cart.clear();
        self.wishlist.clear();
        if let Some(profile) = self.profile.take() {
            info!(email = %profile.email, "Signed out");
        }
    }
}
