//! Checkout summary.
//!
//! There is no payment integration. Checkout only produces the figures the
//! cart footer shows and reports that payment is not available yet.

use serde::Serialize;

use shopapp_core::Money;

use crate::cart::CartStore;

/// Figures shown under the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub item_count: u64,
    pub subtotal: Money,
    pub shipping_fee: Money,
    pub total: Money,
}

impl CheckoutSummary {
    /// Summarise a cart with a flat shipping fee.
    ///
    /// An empty cart is charged no shipping, so every figure is zero.
    #[must_use]
    pub fn of(cart: &CartStore, shipping_fee: Money) -> Self {
        let shipping_fee = if cart.is_empty() {
            Money::ZERO
        } else {
            shipping_fee
        };

        Self {
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
            shipping_fee,
            total: cart.total(shipping_fee),
        }
    }
}

/// Outcome of a checkout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    /// The cart is empty.
    NothingToPay,
    /// The summary is ready but no payment method is wired up.
    PaymentUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutIntent {
    pub summary: CheckoutSummary,
    pub status: CheckoutStatus,
}

impl CheckoutIntent {
    #[must_use]
    pub fn for_cart(cart: &CartStore, shipping_fee: Money) -> Self {
        let status = if cart.is_empty() {
            CheckoutStatus::NothingToPay
        } else {
            CheckoutStatus::PaymentUnavailable
        };

        Self {
            summary: CheckoutSummary::of(cart, shipping_fee),
            status,
        }
    }
}
