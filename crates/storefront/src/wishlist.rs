//! Favourite products.

use serde::Serialize;
use tracing::debug;

use shopapp_core::{Product, ProductId};

/// An ordered, id-unique list of favourite products.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a product. Returns `false` if it was already a favourite.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product.clone());
        debug!(product_id = %product.id, "Added to wishlist");
        true
    }

    /// Remove a product. Absent products are a no-op returning `false`.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| &p.id != product_id);
        self.items.len() != before
    }

    /// Flip the favourite state and return the new state.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(&product.id) {
            false
        } else {
            self.add(product)
        }
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopapp_core::{CategoryId, Money};

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            price: Money::new(1),
            image: String::new(),
            category_id: CategoryId::new("1"),
            rating: 0.0,
            reviews: 0,
            description: String::new(),
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.add(&product("2")));
        assert!(!wishlist.add(&product("2")));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_toggle() {
        let mut wishlist = Wishlist::new();
        let p = product("5");
        assert!(wishlist.toggle(&p));
        assert!(wishlist.contains(&p.id));
        assert!(!wishlist.toggle(&p));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&product("1"));
        assert!(!wishlist.remove(&ProductId::new("9")));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut wishlist = Wishlist::new();
        for id in ["2", "5", "1"] {
            wishlist.add(&product(id));
        }
        wishlist.remove(&ProductId::new("5"));
        let ids: Vec<_> = wishlist.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }
}
