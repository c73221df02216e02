//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOP_SHIPPING_FEE` - Flat shipping fee in minor units (default: 30000)
//! - `SHOP_CURRENCY_SYMBOL` - Symbol appended to formatted prices (default: đ)
//! - `SHOP_CATALOG_PATH` - Catalog YAML file used when none is given explicitly

use std::path::PathBuf;

use thiserror::Error;

use shopapp_core::{DEFAULT_CURRENCY_SYMBOL, Money};

/// Shipping fee charged when `SHOP_SHIPPING_FEE` is not set.
pub const DEFAULT_SHIPPING_FEE: u64 = 30_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Flat shipping fee added to every non-empty cart
    pub shipping_fee: Money,
    /// Currency symbol used when rendering prices
    pub currency_symbol: String,
    /// Catalog document to load instead of the bundled demo
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shipping_fee: Money::new(DEFAULT_SHIPPING_FEE),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let shipping_fee = match non_empty(&lookup, "SHOP_SHIPPING_FEE") {
            Some(raw) => raw.trim().parse::<u64>().map(Money::new).map_err(|e| {
                ConfigError::InvalidEnvVar("SHOP_SHIPPING_FEE".to_string(), e.to_string())
            })?,
            None => Money::new(DEFAULT_SHIPPING_FEE),
        };

        let currency_symbol = non_empty(&lookup, "SHOP_CURRENCY_SYMBOL")
            .map_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string(), |s| s.trim().to_string());

        let catalog_path = non_empty(&lookup, "SHOP_CATALOG_PATH").map(PathBuf::from);

        Ok(Self {
            shipping_fee,
            currency_symbol,
            catalog_path,
        })
    }

    /// Format a price with the configured currency symbol.
    #[must_use]
    pub fn format_price(&self, money: Money) -> String {
        money.display_with(&self.currency_symbol)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable, treating empty or whitespace-only values as unset.
fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.shipping_fee, Money::new(30_000));
        assert_eq!(config.currency_symbol, "đ");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("SHOP_SHIPPING_FEE", " 15000 "),
            ("SHOP_CURRENCY_SYMBOL", "VND"),
            ("SHOP_CATALOG_PATH", "/tmp/catalog.yaml"),
        ]))
        .unwrap();
        assert_eq!(config.shipping_fee, Money::new(15_000));
        assert_eq!(config.format_price(Money::new(1_590_000)), "1.590.000 VND");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/tmp/catalog.yaml"))
        );
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("SHOP_SHIPPING_FEE", "  ")])).unwrap();
        assert_eq!(config.shipping_fee, Money::new(DEFAULT_SHIPPING_FEE));
    }

    #[test]
    fn test_invalid_shipping_fee() {
        for bad in ["-1", "30.000", "free"] {
            let err = StorefrontConfig::from_lookup(lookup(&[("SHOP_SHIPPING_FEE", bad)]))
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SHOP_SHIPPING_FEE"));
        }
    }
}
