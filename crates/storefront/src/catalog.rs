//! Product catalog.
//!
//! The catalog is the data-source boundary: every product is validated when
//! the catalog is built, so the rest of the engine only ever sees well-formed
//! [`Product`] values.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use shopapp_core::{Category, CategoryId, Product, ProductError, ProductId};

/// Bundled demo catalog document.
const DEMO_CATALOG: &str = include_str!("../content/catalog.yaml");

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ProductError),

    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    #[error("duplicate category id: {0}")]
    DuplicateCategory(CategoryId),

    #[error("product {product} references unknown category {category}")]
    UnknownCategory {
        product: ProductId,
        category: CategoryId,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// On-disk catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A validated, read-only set of categories and products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid product, a duplicate product or
    /// category id, or a product pointing at a category that does not exist.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(&category.id) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &products {
            product.validate()?;

            if !product_ids.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }

            if !category_ids.contains(&product.category_id) {
                return Err(CatalogError::UnknownCategory {
                    product: product.id.clone(),
                    category: product.category_id.clone(),
                });
            }
        }

        Ok(Self {
            categories,
            products,
        })
    }

    /// Parse and validate a YAML catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed YAML, or any validation
    /// error from [`Catalog::new`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;
        let catalog = Self::new(document.categories, document.products)?;
        info!(
            categories = catalog.categories.len(),
            products = catalog.products.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// The bundled demo catalog.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled document itself is broken.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_yaml_str(DEMO_CATALOG)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Products in one category, in catalog order.
    #[must_use]
    pub fn products_in(&self, category: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.category_id == category)
            .collect()
    }

    #[must_use]
    pub fn count_in(&self, category: &CategoryId) -> usize {
        self.products
            .iter()
            .filter(|p| &p.category_id == category)
            .count()
    }

    /// Filter by optional category, then by a case-insensitive name search.
    ///
    /// A blank query matches everything. Catalog order is preserved.
    #[must_use]
    pub fn browse(&self, category: Option<&CategoryId>, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();

        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| &p.category_id == c))
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }
}
