//! `run` command: replay a script of intents against a fresh session.
//!
//! # Script format
//!
//! ```yaml
//! - action: add
//!   product: "1"
//!   quantity: 1
//! - action: adjust
//!   product: "1"
//!   delta: 1
//! - action: remove
//!   product: "3"
//! - action: checkout
//! ```
//!
//! Rejected intents are logged and reported; the remaining steps still run,
//! the same way a rejected tap leaves the rest of a UI session alone.

#![allow(clippy::print_stdout)]

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use shopapp_core::{Product, ProductId};
use shopapp_storefront::{
    Catalog, CheckoutStatus, CheckoutSummary, LineItem, Session, StorefrontConfig,
    StorefrontError,
};

/// Errors that stop a script before it runs.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_yaml::Error),
}

const fn one() -> i64 {
    1
}

/// One user intent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Add {
        product: ProductId,
        #[serde(default = "one")]
        quantity: i64,
    },
    Set {
        product: ProductId,
        quantity: i64,
    },
    Adjust {
        product: ProductId,
        delta: i64,
    },
    Remove {
        product: ProductId,
    },
    Clear,
    Wish {
        product: ProductId,
    },
    Unwish {
        product: ProductId,
    },
    WishToCart {
        product: ProductId,
    },
    Checkout,
    Logout,
}

/// Outcome of replaying a script.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub applied: usize,
    pub rejected: Vec<String>,
    pub lines: Vec<LineItem>,
    pub wishlist: Vec<ProductId>,
    pub summary: CheckoutSummary,
    /// Status of the last `checkout` step, if the script had one.
    pub checkout: Option<CheckoutStatus>,
}

/// Parse a YAML script.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] for malformed YAML or unknown actions.
pub fn parse_script(yaml: &str) -> Result<Vec<Step>, ScriptError> {
    Ok(serde_yaml::from_str(yaml)?)
}

fn find<'a>(catalog: &'a Catalog, id: &ProductId) -> Result<&'a Product, StorefrontError> {
    catalog
        .product(id)
        .ok_or_else(|| StorefrontError::ProductNotFound(id.clone()))
}

/// Apply one step to a session.
///
/// Returns the checkout status for a `checkout` step and `None` otherwise.
///
/// # Errors
///
/// Returns the storefront error that rejected the intent.
pub fn apply(
    session: &mut Session,
    catalog: &Catalog,
    step: &Step,
) -> Result<Option<CheckoutStatus>, StorefrontError> {
    match step {
        Step::Add { product, quantity } => {
            session.add_to_cart(find(catalog, product)?, *quantity)?;
        }
        Step::Set { product, quantity } => {
            session.cart_mut().set_quantity(product, *quantity)?;
        }
        Step::Adjust { product, delta } => {
            session.cart_mut().adjust_quantity(product, *delta)?;
        }
        Step::Remove { product } => {
            session.cart_mut().remove_item(product);
        }
        Step::Clear => session.cart_mut().clear(),
        Step::Wish { product } => {
            session.wishlist_mut().add(find(catalog, product)?);
        }
        Step::Unwish { product } => {
            session.wishlist_mut().remove(product);
        }
        Step::WishToCart { product } => session.wishlist_to_cart(product, catalog)?,
        Step::Checkout => return Ok(Some(session.checkout().status)),
        Step::Logout => session.logout(),
    }
    Ok(None)
}

/// Replay steps in order, collecting rejections instead of stopping.
#[must_use]
pub fn replay_steps(steps: &[Step], catalog: &Catalog, session: &mut Session) -> RunReport {
    let mut applied = 0;
    let mut rejected = Vec::new();
    let mut checkout = None;

    for (i, step) in steps.iter().enumerate() {
        match apply(session, catalog, step) {
            Ok(status) => {
                applied += 1;
                checkout = status.or(checkout);
            }
            Err(e) => {
                warn!(step = i + 1, error = %e, "Intent rejected");
                rejected.push(format!("step {}: {e}", i + 1));
            }
        }
    }

    RunReport {
        applied,
        rejected,
        lines: session.cart().line_items().to_vec(),
        wishlist: session
            .wishlist()
            .items()
            .iter()
            .map(|p| p.id.clone())
            .collect(),
        summary: session.summary(),
        checkout,
    }
}

/// Read a script file, replay it and print the resulting cart.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, or JSON
/// encoding fails. Rejected intents are not errors.
pub fn replay(
    path: &Path,
    catalog: &Catalog,
    config: StorefrontConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let steps = parse_script(&content)?;
    info!(steps = steps.len(), "Replaying script");

    let mut session = Session::new(config);
    let report = replay_steps(&steps, catalog, &mut session);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, session.config());
    Ok(())
}

fn print_report(report: &RunReport, config: &StorefrontConfig) {
    if report.lines.is_empty() {
        println!("Cart is empty");
    }

    for line in &report.lines {
        println!(
            "{:>4}  {:<28} {:>3} x {:>14} = {:>16}",
            line.product_id,
            line.name,
            line.quantity,
            config.format_price(line.unit_price),
            config.format_price(line.line_total()),
        );
    }

    let summary = &report.summary;
    println!();
    println!("Items:     {}", summary.item_count);
    println!("Subtotal:  {}", config.format_price(summary.subtotal));
    println!("Shipping:  {}", config.format_price(summary.shipping_fee));
    println!("Total:     {}", config.format_price(summary.total));

    if let Some(status) = report.checkout {
        let message = match status {
            CheckoutStatus::NothingToPay => "nothing to pay",
            CheckoutStatus::PaymentUnavailable => "payment is not available yet",
        };
        println!("Checkout:  {message}");
    }

    if !report.wishlist.is_empty() {
        let ids: Vec<&str> = report.wishlist.iter().map(ProductId::as_str).collect();
        println!("Wishlist:  {}", ids.join(", "));
    }

    println!();
    println!(
        "{} applied, {} rejected",
        report.applied,
        report.rejected.len()
    );
    for rejection in &report.rejected {
        println!("  - {rejection}");
    }
}
