//! # deli-core: Pricing and Order Model for DELI-cious POS
//!
//! This crate holds the menu, the pricing tables and the order aggregate.
//! Everything here is pure: no files, no console, no network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     DELI-cious POS Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Home ──► Order ──► Sandwich / Drink / Chips ──► Checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ deli-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │  topping  │  │  product  │  │   order   │  │   │
//! │  │   │   sizes   │  │  5 kinds  │  │ Sandwich  │  │   Order   │  │   │
//! │  │   │  tables   │  │  price()  │  │ Signature │  │  render   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 deli-receipts (Receipt Layer)                   │   │
//! │  │             Receipt formatting, timestamped text files          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Sandwich and drink size tables, chips price
//! - [`menu`] - Bread, meat, cheese, topping, sauce and side choices
//! - [`topping`] - Toppings and their size-dependent prices
//! - [`product`] - Sandwich, drink, chips and the `Product` sum type
//! - [`signature`] - Pre-built signature sandwiches
//! - [`order`] - The order aggregate, checkout rules and summary text
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks run before building products
//!
//! ## Example Usage
//!
//! ```rust
//! use deli_core::{BreadType, CheeseType, Drink, DrinkSize, MeatType, Order};
//! use deli_core::{Sandwich, SandwichSize, Topping};
//!
//! let mut sandwich = Sandwich::new(SandwichSize::Medium, BreadType::Wheat);
//! sandwich.add_topping(Topping::meat(MeatType::Bacon));
//! sandwich.add_topping(Topping::cheese(CheeseType::Cheddar));
//!
//! let mut order = Order::new();
//! order.add_product(sandwich);
//! order.add_product(Drink::new(DrinkSize::Medium, "Coke"));
//!
//! // 7.00 + 2.00 + 1.50 + 2.50
//! assert_eq!(order.total_price().cents(), 1300);
//! assert!(order.is_valid());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod pricing;
pub mod product;
pub mod signature;
pub mod topping;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use deli_core::Order` instead of
// `use deli_core::order::Order`

pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{BreadType, CheeseType, MeatType, RegularTopping, Sauce, SideType};
pub use money::Money;
pub use order::Order;
pub use pricing::{DrinkSize, SandwichSize, CHIPS_PRICE};
pub use product::{Chips, Drink, Product, ProductKind, Sandwich};
pub use signature::{Recipe, SignatureSandwich, SignatureSandwichType};
pub use topping::{Topping, ToppingCategory};
