//! `orders` command.

#![allow(clippy::print_stdout)]

use shopapp_storefront::{OrderHistory, StorefrontConfig};

/// Print the sample order history.
///
/// # Errors
///
/// Returns an error if the bundled history fails to load or JSON encoding
/// fails.
pub fn list(config: &StorefrontConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let history = OrderHistory::demo()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    if history.is_empty() {
        println!("No orders yet");
        return Ok(());
    }

    for order in history.orders() {
        println!(
            "{}  {}  {:<10} {:>16}",
            order.number,
            order.placed_on.format("%d/%m/%Y"),
            order.status,
            config.format_price(order.amount()),
        );
        for line in &order.lines {
            println!(
                "    {} x{}  {}",
                line.name,
                line.quantity,
                config.format_price(line.unit_price)
            );
        }

        let mut actions = Vec::new();
        if order.status.can_cancel() {
            actions.push("cancel");
        }
        if order.status.can_reorder() {
            actions.push("buy again");
        }
        if !actions.is_empty() {
            println!("    actions: {}", actions.join(", "));
        }
    }

    Ok(())
}
