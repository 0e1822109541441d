//! # Order
//!
//! The aggregate a customer builds during one ordering session.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Building │────►│ Validate │────►│ Receipt  │       │
//! │  │  Order   │     │          │     │          │     │ & Drop   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_product       is_valid()                          │
//! │                        │            validate()                          │
//! │                        ▼                                                │
//! │                   cancel ──────────────────────► (dropped)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout Rules
//! 1. At least one product.
//! 2. With no sandwich, at least one drink or bag of chips.
//!
//! Beyond that, any mix and any count is accepted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;

/// Width of the `=` rules around the item list.
const RULE_WIDTH: usize = 50;

/// A customer order: an append-only list of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: Uuid,
    created_at: DateTime<Utc>,
    products: Vec<Product>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        let order = Order {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            products: Vec::new(),
        };
        debug!(order_id = %order.id, "order started");
        order
    }

    /// Identifier used to correlate log lines for this order.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Appends a product. There is no upper bound on item count.
    pub fn add_product(&mut self, product: impl Into<Product>) {
        let product = product.into();
        debug!(
            order_id = %self.id,
            kind = ?product.kind(),
            price = %product.price(),
            "product added"
        );
        self.products.push(product);
    }

    /// Products in the order they were added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether any line is a sandwich (plain or signature).
    pub fn has_sandwich(&self) -> bool {
        self.products.iter().any(Product::is_sandwich)
    }

    /// Sum of every product's price.
    pub fn total_price(&self) -> Money {
        self.products.iter().map(Product::price).sum()
    }

    /// Checks the checkout rules, reporting which one failed.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyOrder`]: nothing has been added
    /// - [`CoreError::MissingSideItem`]: no sandwich and no drink or chips
    pub fn validate(&self) -> CoreResult<()> {
        if self.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        if !self.has_sandwich() && !self.products.iter().any(Product::is_side_item) {
            return Err(CoreError::MissingSideItem);
        }

        Ok(())
    }

    /// Whether the order may be checked out.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Numbered summary of every line followed by the total.
    ///
    /// ## Layout
    /// ```text
    /// Order Summary:
    /// ==================================================
    /// 1. 8" Wheat Sandwich (Toasted)
    ///   Base Price: $7.00
    ///   ...
    ///   Total: $10.50
    ///
    /// 2. Medium Coke - $2.50
    ///
    /// ==================================================
    /// Total: $13.00
    /// ```
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::from("Order Summary:\n");
        out.push_str(&rule);
        out.push('\n');

        for (number, product) in self.products.iter().enumerate() {
            out.push_str(&format!("{}. {}\n\n", number + 1, product.receipt_description()));
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Total: {}\n", self.total_price()));
        out
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
