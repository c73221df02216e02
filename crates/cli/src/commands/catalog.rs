//! `catalog` command.

#![allow(clippy::print_stdout)]

use shopapp_core::CategoryId;
use shopapp_storefront::{Catalog, StorefrontConfig};

/// Print the products matching an optional category and search text.
///
/// # Errors
///
/// Returns an error if the category is unknown or JSON encoding fails.
pub fn list(
    catalog: &Catalog,
    category: Option<&str>,
    search: &str,
    config: &StorefrontConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = category.map(CategoryId::new);
    if let Some(id) = category.as_ref().filter(|id| catalog.category(id).is_none()) {
        return Err(format!("Unknown category: {id}").into());
    }

    let products = catalog.browse(category.as_ref(), search);

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!("No products found");
        return Ok(());
    }

    for product in products {
        let category_name = catalog
            .category(&product.category_id)
            .map_or("-", |c| c.name.as_str());
        println!(
            "{:>4}  {:<28} {:>16}  {:<12} {:.1}★ ({})",
            product.id,
            product.name,
            config.format_price(product.price),
            category_name,
            product.rating,
            product.reviews,
        );
    }

    Ok(())
}
