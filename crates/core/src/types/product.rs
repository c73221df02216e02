//! Catalog product and category records.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};
use super::money::Money;

/// Errors that can occur when validating a [`Product`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    /// The product ID is empty.
    #[error("product id cannot be empty")]
    EmptyId,
    /// The display name is empty.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
    /// The category reference is empty.
    #[error("product {0} has no category")]
    EmptyCategory(ProductId),
    /// The rating is outside `0.0..=5.0` or not a number.
    #[error("product {id} has rating {rating}, expected 0 to {max}", max = Product::MAX_RATING)]
    RatingOutOfRange {
        /// Offending product.
        id: ProductId,
        /// Rating as supplied.
        rating: f32,
    },
}

/// A product as supplied by the catalog data source.
///
/// The engine treats products as read-only values. Construct them however
/// you like, then run [`Product::validate`] at the data-source boundary
/// before handing them to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the smallest currency unit.
    pub price: Money,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    pub category_id: CategoryId,
    /// Average rating, 0 to 5 stars.
    #[serde(default)]
    pub rating: f32,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Highest allowed rating.
    pub const MAX_RATING: f32 = 5.0;

    /// Check the structural constraints of a product.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: blank id, blank name, blank
    /// category, or a rating outside `0.0..=5.0`.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_blank() {
            return Err(ProductError::EmptyId);
        }

        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName(self.id.clone()));
        }

        if self.category_id.is_blank() {
            return Err(ProductError::EmptyCategory(self.id.clone()));
        }

        if !(0.0..=Self::MAX_RATING).contains(&self.rating) {
            return Err(ProductError::RatingOutOfRange {
                id: self.id.clone(),
                rating: self.rating,
            });
        }

        Ok(())
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Icon key used by the presentation layer.
    #[serde(default)]
    pub icon: String,
}
