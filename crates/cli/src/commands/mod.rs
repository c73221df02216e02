//! CLI command implementations.

#![allow(clippy::print_stdout)]

use std::path::Path;

use tracing::info;

use shopapp_core::Money;
use shopapp_storefront::{Catalog, StorefrontConfig};

pub mod catalog;
pub mod orders;
pub mod run;

/// Load a catalog from an explicit path, the configured path, or the bundled demo.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub fn load_catalog(
    path: Option<&Path>,
    config: &StorefrontConfig,
) -> Result<Catalog, Box<dyn std::error::Error>> {
    match path.or(config.catalog_path.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog from file");
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            Ok(Catalog::from_yaml_str(&content)?)
        }
        None => Ok(Catalog::demo()?),
    }
}

/// Print a formatted amount.
pub fn price(amount: u64, config: &StorefrontConfig) {
    println!("{}", config.format_price(Money::new(amount)));
}
