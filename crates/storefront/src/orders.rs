//! Order history.
//!
//! Orders are read-only records of past purchases. The only actions on them
//! are cancelling an order that is still shipping and buying a delivered
//! order again.

use chrono::NaiveDate;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use shopapp_core::{Money, OrderId, OrderStatus, ProductId};

use crate::cart::{CartError, CartStore};
use crate::catalog::Catalog;

const DEMO_ORDERS: &str = include_str!("../content/orders.yaml");

/// Errors returned by order actions.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order {0} not found")]
    NotFound(OrderId),

    #[error("order {id} cannot be cancelled while {status}")]
    NotCancellable { id: OrderId, status: OrderStatus },

    #[error("order {id} cannot be reordered while {status}")]
    NotReorderable { id: OrderId, status: OrderStatus },

    /// A line of the order no longer exists in the catalog.
    #[error("product {0} is no longer available")]
    ProductUnavailable(ProductId),

    #[error(transparent)]
    Cart(#[from] CartError),

    /// A record in the history is malformed.
    #[error("invalid order {id}: {reason}")]
    InvalidOrder { id: OrderId, reason: &'static str },

    #[error("duplicate order id: {0}")]
    DuplicateOrder(OrderId),

    #[error("failed to parse order history: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl OrderError {
    /// Returns false for errors caused by broken history data rather than
    /// by the requested action.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::InvalidOrder { .. } | Self::DuplicateOrder(_) | Self::Parse(_)
        )
    }
}

/// One purchased product within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Price paid per unit.
    pub unit_price: Money,
}

impl OrderLine {
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// A past order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Customer-facing order number, e.g. `DH123456`.
    pub number: String,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Total paid, computed from the lines.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Check that the order can be looked up and bought again.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidOrder`] for a blank id or number, an
    /// order without lines, or a line with a blank product id or a quantity
    /// below one.
    pub fn validate(&self) -> Result<(), OrderError> {
        let invalid = |reason| {
            Err(OrderError::InvalidOrder {
                id: self.id.clone(),
                reason,
            })
        };

        if self.id.is_blank() {
            return invalid("id is empty");
        }
        if self.number.trim().is_empty() {
            return invalid("number is empty");
        }
        if self.lines.is_empty() {
            return invalid("order has no lines");
        }
        for line in &self.lines {
            if line.product_id.is_blank() {
                return invalid("line has an empty product id");
            }
            if line.quantity < 1 {
                return invalid("line quantity is below one");
            }
        }

        Ok(())
    }
}

/// A customer's orders, newest first.
///
/// Only built through [`OrderHistory::new`], so every order in it is valid
/// and has a unique id.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    /// Build a history, validating every order; orders are sorted newest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidOrder`] for a malformed order or
    /// [`OrderError::DuplicateOrder`] if two orders share an id.
    pub fn new(mut orders: Vec<Order>) -> Result<Self, OrderError> {
        let mut ids = HashSet::new();
        for order in &orders {
            order.validate()?;

            if !ids.insert(&order.id) {
                return Err(OrderError::DuplicateOrder(order.id.clone()));
            }
        }

        orders.sort_by(|a, b| b.placed_on.cmp(&a.placed_on));
        Ok(Self { orders })
    }

    /// Parse and validate a YAML list of orders.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Parse`] for malformed YAML, or any validation
    /// error from [`OrderHistory::new`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, OrderError> {
        let orders: Vec<Order> = serde_yaml::from_str(yaml)?;
        Self::new(orders)
    }

    /// The bundled sample history.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled document itself is broken.
    pub fn demo() -> Result<Self, OrderError> {
        Self::from_yaml_str(DEMO_ORDERS)
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Cancel an order that is still shipping.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for an unknown id, or
    /// [`OrderError::NotCancellable`] if the order is not shipping.
    pub fn cancel(&mut self, id: &OrderId) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;

        if !order.status.can_cancel() {
            return Err(OrderError::NotCancellable {
                id: id.clone(),
                status: order.status,
            });
        }

        order.status = OrderStatus::Cancelled;
        info!(order = %order.number, "Order cancelled");
        Ok(())
    }

    /// Add every line of a delivered order to the cart again.
    ///
    /// Products are resolved against the current catalog and added at the
    /// current catalog price. Either every line is added or the cart is left
    /// untouched. Returns the number of lines added.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`], [`OrderError::NotReorderable`] for an
    /// order that is not delivered, [`OrderError::ProductUnavailable`] if a
    /// line's product is missing from the catalog, or [`OrderError::Cart`] if
    /// a merged quantity overflows.
    #[instrument(skip(self, catalog, cart))]
    pub fn reorder(
        &self,
        id: &OrderId,
        catalog: &Catalog,
        cart: &mut CartStore,
    ) -> Result<usize, OrderError> {
        let order = self
            .get(id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;

        if !order.status.can_reorder() {
            return Err(OrderError::NotReorderable {
                id: id.clone(),
                status: order.status,
            });
        }

        let resolved = order
            .lines
            .iter()
            .map(|line| {
                catalog
                    .product(&line.product_id)
                    .map(|product| (product, line.quantity))
                    .ok_or_else(|| OrderError::ProductUnavailable(line.product_id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut staged = cart.clone();
        for (product, quantity) in &resolved {
            staged.add_item(product, i64::from(*quantity))?;
        }
        *cart = staged;

        info!(order = %order.number, lines = resolved.len(), "Order added to cart again");
        Ok(resolved.len())
    }
}
