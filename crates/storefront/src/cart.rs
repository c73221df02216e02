//! Cart aggregation engine.
//!
//! [`CartStore`] owns the line items of one shopping session. It keeps at
//! most one line per product, never holds a line with a quantity below one,
//! and derives every total from the current lines on each read.
//!
//! # Policies
//!
//! - Removing an absent product is a no-op, never an error.
//! - Update-only operations ([`CartStore::set_quantity`] with a positive
//!   quantity, [`CartStore::adjust_quantity`]) fail with
//!   [`CartError::ItemNotFound`] when the product is not in the cart.
//! - The unit price is snapshotted when a product is first added. Later
//!   catalog price changes do not touch existing lines, and merging more of
//!   the same product keeps the first snapshot.
//! - A mutation that would push the subtotal past `u64::MAX` is rejected
//!   with [`CartError::TotalOverflow`], so totals never saturate.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use shopapp_core::{Money, Product, ProductId};

/// Errors returned by cart mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantity is below one, or the resulting line quantity does not fit.
    #[error("invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// The operation needs an existing line for this product.
    #[error("product {0} is not in the cart")]
    ItemNotFound(ProductId),

    /// The cart subtotal would no longer fit in a [`Money`].
    #[error("cart total overflows with product {0}")]
    TotalOverflow(ProductId),
}

/// One product-quantity pairing in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    /// Always at least one.
    pub quantity: u32,
    /// Unit price captured when the product was first added.
    pub unit_price: Money,
}

impl LineItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            quantity,
            unit_price: product.price,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// The authoritative set of line items for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `quantity` units of a product.
    ///
    /// Merges into the existing line for `product.id` if there is one,
    /// otherwise appends a new line at the end.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity < 1` or if the
    /// merged quantity would not fit in a `u32`, or
    /// [`CartError::TotalOverflow`] if the subtotal would not fit. The cart
    /// is unchanged.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        let added = positive_quantity(quantity)?;

        let existing = self
            .get(&product.id)
            .map(|line| (line.unit_price, line.quantity));

        if let Some((unit_price, current)) = existing {
            let merged = current
                .checked_add(added)
                .ok_or(CartError::InvalidQuantity { quantity })?;
            self.ensure_total_fits(&product.id, unit_price, merged)?;
            if let Some(line) = self.line_mut(&product.id) {
                line.quantity = merged;
            }
            debug!(product_id = %product.id, quantity = merged, "Merged cart line");
        } else {
            self.ensure_total_fits(&product.id, product.price, added)?;
            self.items.push(LineItem::from_product(product, added));
            debug!(product_id = %product.id, quantity = added, "Added cart line");
        }

        Ok(())
    }

    /// Remove the line for a product.
    ///
    /// Returns `true` if a line was removed. An absent product is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| &line.product_id != product_id);
        let removed = self.items.len() != before;
        if removed {
            debug!(product_id = %product_id, "Removed cart line");
        }
        removed
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line (a no-op if it is absent).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if `quantity > 0` and the product
    /// has no line, [`CartError::InvalidQuantity`] if the quantity does
    /// not fit in a `u32`, or [`CartError::TotalOverflow`] if the subtotal
    /// would not fit.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            self.remove_item(product_id);
            return Ok(());
        }

        let quantity_u32 = positive_quantity(quantity)?;
        let unit_price = self
            .get(product_id)
            .map(|line| line.unit_price)
            .ok_or_else(|| CartError::ItemNotFound(product_id.clone()))?;
        self.ensure_total_fits(product_id, unit_price, quantity_u32)?;
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity_u32;
        }
        debug!(product_id = %product_id, quantity = quantity_u32, "Set cart line quantity");
        Ok(())
    }

    /// Change the quantity of an existing line by `delta`.
    ///
    /// Dropping to zero or below removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if the product has no line, or
    /// [`CartError::InvalidQuantity`] if the result does not fit in a `u32`.
    pub fn adjust_quantity(&mut self, product_id: &ProductId, delta: i64) -> Result<(), CartError> {
        let current = self
            .get(product_id)
            .map(|line| i64::from(line.quantity))
            .ok_or_else(|| CartError::ItemNotFound(product_id.clone()))?;
        self.set_quantity(product_id, current.saturating_add(delta))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            debug!(lines = self.items.len(), "Cleared cart");
        }
        self.items.clear();
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    /// The line for a product, if present.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.product_id == product_id)
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `unit_price × quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Subtotal plus a caller-supplied flat shipping fee.
    #[must_use]
    pub fn total(&self, shipping_fee: Money) -> Money {
        self.subtotal() + shipping_fee
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|line| &line.product_id == product_id)
    }

    /// Check that the subtotal still fits once `product_id` holds `quantity`
    /// units at `unit_price`.
    fn ensure_total_fits(
        &self,
        product_id: &ProductId,
        unit_price: Money,
        quantity: u32,
    ) -> Result<(), CartError> {
        let others = self
            .items
            .iter()
            .filter(|line| &line.product_id != product_id)
            .try_fold(Money::ZERO, |acc, line| acc.checked_add(line.line_total()));

        others
            .zip(unit_price.checked_times(quantity))
            .and_then(|(others, line_total)| others.checked_add(line_total))
            .map(|_| ())
            .ok_or_else(|| CartError::TotalOverflow(product_id.clone()))
    }
}

fn positive_quantity(quantity: i64) -> Result<u32, CartError> {
    if quantity < 1 {
        return Err(CartError::InvalidQuantity { quantity });
    }
    u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity { quantity })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use shopapp_core::CategoryId;

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Money::new(price),
            image: String::new(),
            category_id: CategoryId::new("1"),
            rating: 0.0,
            reviews: 0,
            description: String::new(),
        }
    }

    fn ids(cart: &CartStore) -> Vec<&str> {
        cart.line_items()
            .iter()
            .map(|line| line.product_id.as_str())
            .collect()
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = CartStore::new();
        let p = product("1", 1000);
        cart.add_item(&p, 1).unwrap();
        cart.add_item(&p, 1).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line_items()[0].quantity, 2);
    }

    #[test]
    fn test_add_merge_scenario() {
        let mut cart = CartStore::new();
        let a = product("A", 1000);
        cart.add_item(&a, 1).unwrap();
        cart.add_item(&a, 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&a.id).unwrap().quantity, 3);
        assert_eq!(cart.subtotal(), Money::new(3000));
    }

    #[test]
    fn test_add_rejects_non_positive() {
        let mut cart = CartStore::new();
        let p = product("1", 1000);
        assert_eq!(
            cart.add_item(&p, 0),
            Err(CartError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(
            cart.add_item(&p, -3),
            Err(CartError::InvalidQuantity { quantity: -3 })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_overflow_leaves_cart_untouched() {
        let mut cart = CartStore::new();
        let p = product("1", 1);
        cart.add_item(&p, i64::from(u32::MAX)).unwrap();
        assert!(matches!(
            cart.add_item(&p, 1),
            Err(CartError::InvalidQuantity { .. })
        ));
        assert_eq!(cart.get(&p.id).unwrap().quantity, u32::MAX);
        assert!(cart.add_item(&product("2", 1), i64::from(u32::MAX) + 1).is_err());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_line_total_overflow_rejected() {
        let mut cart = CartStore::new();
        let pricey = product("1", u64::MAX / 2 + 1);
        cart.add_item(&pricey, 1).unwrap();

        assert_eq!(
            cart.add_item(&pricey, 1),
            Err(CartError::TotalOverflow(pricey.id.clone()))
        );
        assert_eq!(
            cart.set_quantity(&pricey.id, 3),
            Err(CartError::TotalOverflow(pricey.id.clone()))
        );
        assert_eq!(cart.get(&pricey.id).unwrap().quantity, 1);
        assert_eq!(cart.subtotal(), Money::new(u64::MAX / 2 + 1));
    }

    #[test]
    fn test_subtotal_overflow_across_lines_rejected() {
        let mut cart = CartStore::new();
        cart.add_item(&product("1", u64::MAX - 10), 1).unwrap();

        let extra = product("2", 11);
        assert_eq!(
            cart.add_item(&extra, 1),
            Err(CartError::TotalOverflow(extra.id.clone()))
        );
        cart.add_item(&product("3", 10), 1).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal(), Money::new(u64::MAX));
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let mut cart = CartStore::new();
        cart.add_item(&product("1", 10), 3).unwrap();
        cart.add_item(&product("2", 10), 3).unwrap();

        cart.set_quantity(&ProductId::new("1"), 0).unwrap();
        cart.set_quantity(&ProductId::new("2"), -5).unwrap();

        assert!(cart.is_empty());
        assert!(cart.line_items().iter().all(|line| line.quantity >= 1));
    }

    #[test]
    fn test_set_quantity_missing_item() {
        let mut cart = CartStore::new();
        let missing = ProductId::new("nope");
        assert_eq!(
            cart.set_quantity(&missing, 2),
            Err(CartError::ItemNotFound(missing.clone()))
        );
        // Non-positive on a missing line is a removal, which is a no-op.
        assert!(cart.set_quantity(&missing, 0).is_ok());
    }

    #[test]
    fn test_set_quantity_keeps_order() {
        let mut cart = CartStore::new();
        cart.add_item(&product("a", 10), 1).unwrap();
        cart.add_item(&product("b", 10), 1).unwrap();
        cart.add_item(&product("c", 10), 1).unwrap();

        cart.set_quantity(&ProductId::new("a"), 9).unwrap();
        cart.add_item(&product("b", 10), 4).unwrap();

        assert_eq!(ids(&cart), ["a", "b", "c"]);
        assert_eq!(cart.item_count(), 9 + 5 + 1);
    }

    #[test]
    fn test_adjust_quantity() {
        let mut cart = CartStore::new();
        let id = ProductId::new("1");
        cart.add_item(&product("1", 10), 1).unwrap();

        cart.adjust_quantity(&id, 1).unwrap();
        assert_eq!(cart.get(&id).unwrap().quantity, 2);

        cart.adjust_quantity(&id, -2).unwrap();
        assert!(!cart.contains(&id));

        assert_eq!(
            cart.adjust_quantity(&id, 1),
            Err(CartError::ItemNotFound(id))
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(&product("1", 10), 1).unwrap();
        assert!(!cart.remove_item(&ProductId::new("2")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut cart = CartStore::new();
        cart.add_item(&product("A", 10), 1).unwrap();
        cart.add_item(&product("B", 10), 1).unwrap();
        assert!(cart.remove_item(&ProductId::new("A")));
        assert_eq!(ids(&cart), ["B"]);
    }

    #[test]
    fn test_clear_empty_cart() {
        let mut cart = CartStore::new();
        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), Money::ZERO);
    }

    #[test]
    fn test_totals() {
        let mut cart = CartStore::new();
        cart.add_item(&product("1", 10_990_000), 1).unwrap();
        cart.add_item(&product("3", 1_590_000), 2).unwrap();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), Money::new(14_170_000));
        assert_eq!(cart.total(Money::new(30_000)), Money::new(14_200_000));
    }

    #[test]
    fn test_price_snapshot_survives_catalog_change() {
        let mut cart = CartStore::new();
        let mut p = product("1", 1000);
        cart.add_item(&p, 1).unwrap();

        p.price = Money::new(5000);
        cart.add_item(&p, 1).unwrap();

        let line = cart.get(&p.id).unwrap();
        assert_eq!(line.unit_price, Money::new(1000));
        assert_eq!(cart.subtotal(), Money::new(2000));
    }
}
