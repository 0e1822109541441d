//! # Toppings
//!
//! One topping instance on a sandwich: which ingredient, which category,
//! and whether it is an extra portion.
//!
//! ## Pricing Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category   price(size)                                                 │
//! │  ────────   ──────────────────────────────────────────────────────      │
//! │  Meat       size.meat_price   + (extra ? size.extra_meat_price   : 0)  │
//! │  Cheese     size.cheese_price + (extra ? size.extra_cheese_price : 0)  │
//! │  Regular    0                                                           │
//! │  Sauce      0                                                           │
//! │  Side       0                                                           │
//! │                                                                         │
//! │  Example: Large, extra Bacon = 3.00 + 1.50 = $4.50                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only meat and cheese can be extra; the free categories have no flag to set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::menu::{CheeseType, MeatType, RegularTopping, Sauce, SideType};
use crate::money::Money;
use crate::pricing::SandwichSize;

/// Category tag carried by every topping.
///
/// Receipts group toppings by this tag, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToppingCategory {
    Meat,
    Cheese,
    Regular,
    Sauce,
    Side,
}

impl ToppingCategory {
    /// All categories in receipt order.
    pub const ALL: [ToppingCategory; 5] = [
        ToppingCategory::Meat,
        ToppingCategory::Cheese,
        ToppingCategory::Regular,
        ToppingCategory::Sauce,
        ToppingCategory::Side,
    ];

    /// Whether toppings in this category cost money.
    pub const fn is_premium(self) -> bool {
        matches!(self, ToppingCategory::Meat | ToppingCategory::Cheese)
    }
}

/// A single topping. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Topping {
    Meat { kind: MeatType, extra: bool },
    Cheese { kind: CheeseType, extra: bool },
    Regular { kind: RegularTopping },
    Sauce { kind: Sauce },
    Side { kind: SideType },
}

impl Topping {
    /// A regular portion of meat.
    pub const fn meat(kind: MeatType) -> Self {
        Topping::Meat { kind, extra: false }
    }

    /// An extra portion of meat.
    pub const fn extra_meat(kind: MeatType) -> Self {
        Topping::Meat { kind, extra: true }
    }

    /// A regular portion of cheese.
    pub const fn cheese(kind: CheeseType) -> Self {
        Topping::Cheese { kind, extra: false }
    }

    /// An extra portion of cheese.
    pub const fn extra_cheese(kind: CheeseType) -> Self {
        Topping::Cheese { kind, extra: true }
    }

    pub const fn regular(kind: RegularTopping) -> Self {
        Topping::Regular { kind }
    }

    pub const fn sauce(kind: Sauce) -> Self {
        Topping::Sauce { kind }
    }

    pub const fn side(kind: SideType) -> Self {
        Topping::Side { kind }
    }

    /// Returns the category tag.
    pub const fn category(&self) -> ToppingCategory {
        match self {
            Topping::Meat { .. } => ToppingCategory::Meat,
            Topping::Cheese { .. } => ToppingCategory::Cheese,
            Topping::Regular { .. } => ToppingCategory::Regular,
            Topping::Sauce { .. } => ToppingCategory::Sauce,
            Topping::Side { .. } => ToppingCategory::Side,
        }
    }

    /// Whether this is an extra portion. Always false outside meat and cheese.
    pub const fn is_extra(&self) -> bool {
        match self {
            Topping::Meat { extra, .. } | Topping::Cheese { extra, .. } => *extra,
            Topping::Regular { .. } | Topping::Sauce { .. } | Topping::Side { .. } => false,
        }
    }

    /// The bare ingredient name, without any "Extra" prefix.
    pub const fn name(&self) -> &'static str {
        match self {
            Topping::Meat { kind, .. } => kind.display_name(),
            Topping::Cheese { kind, .. } => kind.display_name(),
            Topping::Regular { kind } => kind.display_name(),
            Topping::Sauce { kind } => kind.display_name(),
            Topping::Side { kind } => kind.display_name(),
        }
    }

    /// The name as shown to customers, e.g. `Extra Bacon`.
    pub fn display_name(&self) -> String {
        self.to_string()
    }

    /// Price of this topping on a sandwich of the given size.
    pub fn price(&self, size: SandwichSize) -> Money {
        let table = size.pricing();
        match *self {
            Topping::Meat { extra, .. } => {
                if extra {
                    table.meat_price + table.extra_meat_price
                } else {
                    table.meat_price
                }
            }
            Topping::Cheese { extra, .. } => {
                if extra {
                    table.cheese_price + table.extra_cheese_price
                } else {
                    table.cheese_price
                }
            }
            Topping::Regular { .. } | Topping::Sauce { .. } | Topping::Side { .. } => Money::zero(),
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_extra() {
            f.write_str("Extra ")?;
        }
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meat_price_all_sizes() {
        for size in SandwichSize::ALL {
            let table = size.pricing();
            assert_eq!(Topping::meat(MeatType::Ham).price(size), table.meat_price);
            assert_eq!(
                Topping::extra_meat(MeatType::Ham).price(size),
                table.meat_price + table.extra_meat_price
            );
        }
    }

    #[test]
    fn test_cheese_price_all_sizes() {
        for size in SandwichSize::ALL {
            let table = size.pricing();
            assert_eq!(
                Topping::cheese(CheeseType::Swiss).price(size),
                table.cheese_price
            );
            assert_eq!(
                Topping::extra_cheese(CheeseType::Swiss).price(size),
                table.cheese_price + table.extra_cheese_price
            );
        }
    }

    #[test]
    fn test_free_toppings_all_sizes() {
        for size in SandwichSize::ALL {
            assert!(Topping::regular(RegularTopping::Lettuce).price(size).is_zero());
            assert!(Topping::sauce(Sauce::Mayo).price(size).is_zero());
            assert!(Topping::side(SideType::AuJus).price(size).is_zero());
        }
    }

    #[test]
    fn test_large_extra_bacon() {
        let bacon = Topping::extra_meat(MeatType::Bacon);
        assert_eq!(bacon.price(SandwichSize::Large).cents(), 450);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Topping::meat(MeatType::Bacon).display_name(), "Bacon");
        assert_eq!(
            Topping::extra_cheese(CheeseType::Cheddar).display_name(),
            "Extra Cheddar"
        );
        assert_eq!(Topping::side(SideType::AuJus).display_name(), "Au Jus");
    }

    #[test]
    fn test_category_and_extra() {
        let mayo = Topping::sauce(Sauce::Mayo);
        assert_eq!(mayo.category(), ToppingCategory::Sauce);
        assert!(!mayo.is_extra());
        assert!(!mayo.category().is_premium());

        let steak = Topping::extra_meat(MeatType::Steak);
        assert_eq!(steak.category(), ToppingCategory::Meat);
        assert!(steak.is_extra());
        assert!(steak.category().is_premium());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Topping::extra_meat(MeatType::RoastBeef)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "category": "meat", "kind": "roast_beef", "extra": true })
        );
    }
}
