//! # Pricing Tables
//!
//! Static price configuration keyed by sandwich size and drink size.
//!
//! ## Table Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SANDWICH PRICING                                                       │
//! │                                                                         │
//! │  Size    Inches  Base   Meat   Cheese  +Meat  +Cheese  Side            │
//! │  ──────  ──────  ─────  ─────  ──────  ─────  ───────  ─────           │
//! │  Small      4    5.50   1.00    0.75   0.50    0.30    0.50            │
//! │  Medium     8    7.00   2.00    1.50   1.00    0.60    0.75            │
//! │  Large     12    8.50   3.00    2.25   1.50    0.90    1.00            │
//! │                                                                         │
//! │  DRINK PRICING          Small 2.00   Medium 2.50   Large 3.00          │
//! │  CHIPS                  flat 1.50                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The size enums carry no behaviour of their own beyond looking up their
//! record. Records are `&'static` and never change at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// Flat price for any bag of chips.
pub const CHIPS_PRICE: Money = Money::from_cents(150);

// =============================================================================
// Sandwich Size
// =============================================================================

/// Price constants for one sandwich size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandwichPricing {
    /// Length in inches (display only).
    pub inches: u8,
    /// Bread and assembly, before toppings.
    pub base_price: Money,
    /// One portion of meat.
    pub meat_price: Money,
    /// One portion of cheese.
    pub cheese_price: Money,
    /// Surcharge on top of `meat_price` for an extra portion.
    pub extra_meat_price: Money,
    /// Surcharge on top of `cheese_price` for an extra portion.
    pub extra_cheese_price: Money,
    /// Listed side price. Sides are currently served free.
    pub side_price: Money,
}

const SMALL_SANDWICH: SandwichPricing = SandwichPricing {
    inches: 4,
    base_price: Money::from_cents(550),
    meat_price: Money::from_cents(100),
    cheese_price: Money::from_cents(75),
    extra_meat_price: Money::from_cents(50),
    extra_cheese_price: Money::from_cents(30),
    side_price: Money::from_cents(50),
};

const MEDIUM_SANDWICH: SandwichPricing = SandwichPricing {
    inches: 8,
    base_price: Money::from_cents(700),
    meat_price: Money::from_cents(200),
    cheese_price: Money::from_cents(150),
    extra_meat_price: Money::from_cents(100),
    extra_cheese_price: Money::from_cents(60),
    side_price: Money::from_cents(75),
};

const LARGE_SANDWICH: SandwichPricing = SandwichPricing {
    inches: 12,
    base_price: Money::from_cents(850),
    meat_price: Money::from_cents(300),
    cheese_price: Money::from_cents(225),
    extra_meat_price: Money::from_cents(150),
    extra_cheese_price: Money::from_cents(90),
    side_price: Money::from_cents(100),
};

/// Sandwich length. Determines every size-dependent price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SandwichSize {
    Small,
    Medium,
    Large,
}

impl SandwichSize {
    /// All sizes in menu order.
    pub const ALL: [SandwichSize; 3] = [
        SandwichSize::Small,
        SandwichSize::Medium,
        SandwichSize::Large,
    ];

    /// Looks up the pricing record for this size.
    pub const fn pricing(self) -> &'static SandwichPricing {
        match self {
            SandwichSize::Small => &SMALL_SANDWICH,
            SandwichSize::Medium => &MEDIUM_SANDWICH,
            SandwichSize::Large => &LARGE_SANDWICH,
        }
    }

    /// Length in inches.
    pub const fn inches(self) -> u8 {
        self.pricing().inches
    }

    /// Price of the sandwich before toppings.
    pub const fn base_price(self) -> Money {
        self.pricing().base_price
    }

    /// Menu label, e.g. `8" - $7.00`.
    pub fn menu_label(self) -> String {
        format!("{} - {}", self, self.base_price())
    }
}

/// Displays as the length, e.g. `8"`.
impl fmt::Display for SandwichSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\"", self.inches())
    }
}

// =============================================================================
// Drink Size
// =============================================================================

/// Price constants for one drink size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrinkPricing {
    pub display_name: &'static str,
    pub price: Money,
}

const SMALL_DRINK: DrinkPricing = DrinkPricing {
    display_name: "Small",
    price: Money::from_cents(200),
};

const MEDIUM_DRINK: DrinkPricing = DrinkPricing {
    display_name: "Medium",
    price: Money::from_cents(250),
};

const LARGE_DRINK: DrinkPricing = DrinkPricing {
    display_name: "Large",
    price: Money::from_cents(300),
};

/// Cup size. Independent of [`SandwichSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkSize {
    Small,
    Medium,
    Large,
}

impl DrinkSize {
    /// All sizes in menu order.
    pub const ALL: [DrinkSize; 3] = [DrinkSize::Small, DrinkSize::Medium, DrinkSize::Large];

    /// Looks up the pricing record for this size.
    pub const fn pricing(self) -> &'static DrinkPricing {
        match self {
            DrinkSize::Small => &SMALL_DRINK,
            DrinkSize::Medium => &MEDIUM_DRINK,
            DrinkSize::Large => &LARGE_DRINK,
        }
    }

    pub const fn price(self) -> Money {
        self.pricing().price
    }

    pub const fn display_name(self) -> &'static str {
        self.pricing().display_name
    }

    /// Menu label, e.g. `Medium - $2.50`.
    pub fn menu_label(self) -> String {
        format!("{} - {}", self.display_name(), self.price())
    }
}

impl fmt::Display for DrinkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandwich_table() {
        let medium = SandwichSize::Medium.pricing();
        assert_eq!(medium.inches, 8);
        assert_eq!(medium.base_price.cents(), 700);
        assert_eq!(medium.meat_price.cents(), 200);
        assert_eq!(medium.cheese_price.cents(), 150);
        assert_eq!(medium.extra_meat_price.cents(), 100);
        assert_eq!(medium.extra_cheese_price.cents(), 60);
        assert_eq!(medium.side_price.cents(), 75);

        assert_eq!(SandwichSize::Small.base_price().cents(), 550);
        assert_eq!(SandwichSize::Large.base_price().cents(), 850);
        assert_eq!(SandwichSize::Large.pricing().extra_meat_price.cents(), 150);
    }

    #[test]
    fn test_sandwich_size_display() {
        assert_eq!(SandwichSize::Small.to_string(), "4\"");
        assert_eq!(SandwichSize::Large.to_string(), "12\"");
        assert_eq!(SandwichSize::Medium.menu_label(), "8\" - $7.00");
    }

    #[test]
    fn test_drink_table() {
        let prices: Vec<i64> = DrinkSize::ALL.iter().map(|s| s.price().cents()).collect();
        assert_eq!(prices, vec![200, 250, 300]);
        assert_eq!(DrinkSize::Medium.to_string(), "Medium");
        assert_eq!(DrinkSize::Large.menu_label(), "Large - $3.00");
    }

    #[test]
    fn test_chips_price() {
        assert_eq!(CHIPS_PRICE.to_string(), "$1.50");
    }
}
