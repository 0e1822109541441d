//! # Menu Option Sets
//!
//! The closed sets of ingredients a customer can choose from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Option set       Count   Priced?                                       │
//! │  ───────────────  ─────   ─────────────────────────────────────         │
//! │  BreadType          4     no (included in the size base price)          │
//! │  MeatType           6     yes, by sandwich size (+ extra surcharge)     │
//! │  CheeseType         4     yes, by sandwich size (+ extra surcharge)     │
//! │  RegularTopping     9     free                                          │
//! │  Sauce              6     free                                          │
//! │  SideType           2     free                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every set exposes `ALL` in menu order and a stable `display_name`, which
//! is what the console lists and what receipts print.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a fieldless menu enum with display names and an `ALL` list.
macro_rules! menu_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $display:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All options in menu order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable name shown on menus and receipts.
            pub const fn display_name(self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.display_name())
            }
        }
    };
}

menu_enum! {
    /// Bread choice. Does not affect price.
    BreadType {
        White => "White",
        Wheat => "Wheat",
        Rye => "Rye",
        Wrap => "Wrap",
    }
}

menu_enum! {
    /// Premium meat topping.
    MeatType {
        Steak => "Steak",
        Ham => "Ham",
        Salami => "Salami",
        RoastBeef => "Roast Beef",
        Chicken => "Chicken",
        Bacon => "Bacon",
    }
}

menu_enum! {
    /// Premium cheese topping.
    CheeseType {
        American => "American",
        Provolone => "Provolone",
        Cheddar => "Cheddar",
        Swiss => "Swiss",
    }
}

menu_enum! {
    /// Free vegetable/extra topping.
    RegularTopping {
        Lettuce => "Lettuce",
        Peppers => "Peppers",
        Onions => "Onions",
        Tomatoes => "Tomatoes",
        Jalapenos => "Jalapeños",
        Cucumbers => "Cucumbers",
        Pickles => "Pickles",
        Guacamole => "Guacamole",
        Mushrooms => "Mushrooms",
    }
}

menu_enum! {
    /// Free sauce.
    Sauce {
        Mayo => "Mayo",
        Mustard => "Mustard",
        Ketchup => "Ketchup",
        Ranch => "Ranch",
        ThousandIslands => "Thousand Islands",
        Vinaigrette => "Vinaigrette",
    }
}

menu_enum! {
    /// Served alongside the sandwich rather than on it.
    SideType {
        AuJus => "Au Jus",
        Sauce => "Sauce",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_counts() {
        assert_eq!(BreadType::ALL.len(), 4);
        assert_eq!(MeatType::ALL.len(), 6);
        assert_eq!(CheeseType::ALL.len(), 4);
        assert_eq!(RegularTopping::ALL.len(), 9);
        assert_eq!(Sauce::ALL.len(), 6);
        assert_eq!(SideType::ALL.len(), 2);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(MeatType::RoastBeef.to_string(), "Roast Beef");
        assert_eq!(RegularTopping::Jalapenos.display_name(), "Jalapeños");
        assert_eq!(Sauce::ThousandIslands.display_name(), "Thousand Islands");
        assert_eq!(SideType::AuJus.to_string(), "Au Jus");
    }

    #[test]
    fn test_menu_order() {
        assert_eq!(BreadType::ALL.first(), Some(&BreadType::White));
        assert_eq!(BreadType::ALL.last(), Some(&BreadType::Wrap));
        assert_eq!(MeatType::ALL.last(), Some(&MeatType::Bacon));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&MeatType::RoastBeef).unwrap();
        assert_eq!(json, "\"roast_beef\"");
        let sauce: Sauce = serde_json::from_str("\"thousand_islands\"").unwrap();
        assert_eq!(sauce, Sauce::ThousandIslands);
    }
}
