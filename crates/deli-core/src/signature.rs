//! # Signature Sandwiches
//!
//! Named preset recipes that expand into a pre-populated [`Sandwich`].
//!
//! ## Recipe Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Signature           Bread  Toasted  Toppings (in order)               │
//! │  ──────────────────  ─────  ───────  ───────────────────────────────   │
//! │  BLT                 White  yes      Bacon, Lettuce, Tomatoes, Mayo    │
//! │  Philly Cheesesteak  Wrap   no       Steak, Provolone, Peppers, Onions │
//! │  Italian             Wheat  no       Ham, Salami, Provolone, Lettuce,  │
//! │                                      Tomatoes, Onions, Vinaigrette     │
//! │  Club                White  yes      Ham, Chicken, Bacon, Swiss,       │
//! │                                      Lettuce, Tomatoes, Mayo           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No preset topping is an extra portion. After [`SignatureSandwich::build`]
//! the customer may keep adding toppings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::menu::{BreadType, CheeseType, MeatType, RegularTopping, Sauce};
use crate::money::Money;
use crate::pricing::SandwichSize;
use crate::product::Sandwich;
use crate::topping::Topping;

/// A fixed recipe: bread, toasted flag and ordered toppings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub bread: BreadType,
    pub toasted: bool,
    pub toppings: &'static [Topping],
}

const BLT: Recipe = Recipe {
    bread: BreadType::White,
    toasted: true,
    toppings: &[
        Topping::meat(MeatType::Bacon),
        Topping::regular(RegularTopping::Lettuce),
        Topping::regular(RegularTopping::Tomatoes),
        Topping::sauce(Sauce::Mayo),
    ],
};

const PHILLY_CHEESESTEAK: Recipe = Recipe {
    bread: BreadType::Wrap,
    toasted: false,
    toppings: &[
        Topping::meat(MeatType::Steak),
        Topping::cheese(CheeseType::Provolone),
        Topping::regular(RegularTopping::Peppers),
        Topping::regular(RegularTopping::Onions),
    ],
};

const ITALIAN: Recipe = Recipe {
    bread: BreadType::Wheat,
    toasted: false,
    toppings: &[
        Topping::meat(MeatType::Ham),
        Topping::meat(MeatType::Salami),
        Topping::cheese(CheeseType::Provolone),
        Topping::regular(RegularTopping::Lettuce),
        Topping::regular(RegularTopping::Tomatoes),
        Topping::regular(RegularTopping::Onions),
        Topping::sauce(Sauce::Vinaigrette),
    ],
};

const CLUB: Recipe = Recipe {
    bread: BreadType::White,
    toasted: true,
    toppings: &[
        Topping::meat(MeatType::Ham),
        Topping::meat(MeatType::Chicken),
        Topping::meat(MeatType::Bacon),
        Topping::cheese(CheeseType::Swiss),
        Topping::regular(RegularTopping::Lettuce),
        Topping::regular(RegularTopping::Tomatoes),
        Topping::sauce(Sauce::Mayo),
    ],
};

/// Identifier of a signature recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureSandwichType {
    Blt,
    PhillyCheesesteak,
    Italian,
    Club,
}

impl SignatureSandwichType {
    /// All signatures in menu order.
    pub const ALL: [SignatureSandwichType; 4] = [
        SignatureSandwichType::Blt,
        SignatureSandwichType::PhillyCheesesteak,
        SignatureSandwichType::Italian,
        SignatureSandwichType::Club,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            SignatureSandwichType::Blt => "BLT",
            SignatureSandwichType::PhillyCheesesteak => "Philly Cheesesteak",
            SignatureSandwichType::Italian => "Italian Sub",
            SignatureSandwichType::Club => "Club Sandwich",
        }
    }

    /// Menu blurb shown under the name.
    pub const fn blurb(self) -> &'static str {
        match self {
            SignatureSandwichType::Blt => {
                "Classic Bacon, Lettuce, and Tomato on toasted white bread with mayo"
            }
            SignatureSandwichType::PhillyCheesesteak => {
                "Steak and provolone with grilled peppers and onions on a wrap"
            }
            SignatureSandwichType::Italian => {
                "Ham and salami with provolone, lettuce, tomatoes, onions, and vinaigrette"
            }
            SignatureSandwichType::Club => {
                "Ham, chicken, and bacon with swiss, lettuce, tomatoes, and mayo on toasted white"
            }
        }
    }

    /// Looks up the fixed recipe.
    pub const fn recipe(self) -> &'static Recipe {
        match self {
            SignatureSandwichType::Blt => &BLT,
            SignatureSandwichType::PhillyCheesesteak => &PHILLY_CHEESESTEAK,
            SignatureSandwichType::Italian => &ITALIAN,
            SignatureSandwichType::Club => &CLUB,
        }
    }
}

impl fmt::Display for SignatureSandwichType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A sandwich that started from a signature recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureSandwich {
    signature: SignatureSandwichType,
    sandwich: Sandwich,
}

impl SignatureSandwich {
    /// Expands the recipe for `signature` at the given size.
    ///
    /// ```rust
    /// use deli_core::{SandwichSize, SignatureSandwich, SignatureSandwichType};
    ///
    /// let blt = SignatureSandwich::build(SignatureSandwichType::Blt, SandwichSize::Small);
    /// assert!(blt.is_toasted());
    /// assert_eq!(blt.toppings().len(), 4);
    /// ```
    pub fn build(signature: SignatureSandwichType, size: SandwichSize) -> Self {
        let recipe = signature.recipe();
        let mut sandwich = Sandwich::new(size, recipe.bread);
        sandwich.set_toasted(recipe.toasted);
        for topping in recipe.toppings {
            sandwich.add_topping(*topping);
        }
        SignatureSandwich {
            signature,
            sandwich,
        }
    }

    pub fn signature(&self) -> SignatureSandwichType {
        self.signature
    }

    /// The underlying sandwich.
    pub fn sandwich(&self) -> &Sandwich {
        &self.sandwich
    }

    /// Customization on top of the recipe.
    pub fn add_topping(&mut self, topping: Topping) {
        self.sandwich.add_topping(topping);
    }

    pub fn set_toasted(&mut self, toasted: bool) {
        self.sandwich.set_toasted(toasted);
    }

    pub fn size(&self) -> SandwichSize {
        self.sandwich.size()
    }

    pub fn bread(&self) -> BreadType {
        self.sandwich.bread()
    }

    pub fn is_toasted(&self) -> bool {
        self.sandwich.is_toasted()
    }

    pub fn toppings(&self) -> &[Topping] {
        self.sandwich.toppings()
    }

    pub fn price(&self) -> Money {
        self.sandwich.price()
    }

    /// `BLT Signature - 4" White Sandwich (Toasted) - Toppings: ...`
    pub fn description(&self) -> String {
        format!(
            "{} Signature - {}",
            self.signature.display_name(),
            self.sandwich.description()
        )
    }

    /// Same as the underlying sandwich: receipts do not name the signature.
    pub fn detailed_description(&self) -> String {
        self.sandwich.detailed_description()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::SideType;

    fn names(sandwich: &SignatureSandwich) -> Vec<String> {
        sandwich.toppings().iter().map(Topping::display_name).collect()
    }

    #[test]
    fn test_blt_recipe() {
        let blt = SignatureSandwich::build(SignatureSandwichType::Blt, SandwichSize::Medium);
        assert_eq!(blt.bread(), BreadType::White);
        assert!(blt.is_toasted());
        assert_eq!(names(&blt), ["Bacon", "Lettuce", "Tomatoes", "Mayo"]);
    }

    #[test]
    fn test_philly_recipe() {
        let philly = SignatureSandwich::build(
            SignatureSandwichType::PhillyCheesesteak,
            SandwichSize::Large,
        );
        assert_eq!(philly.bread(), BreadType::Wrap);
        assert!(!philly.is_toasted());
        assert_eq!(names(&philly), ["Steak", "Provolone", "Peppers", "Onions"]);
    }

    #[test]
    fn test_italian_recipe() {
        let italian = SignatureSandwich::build(SignatureSandwichType::Italian, SandwichSize::Small);
        assert_eq!(italian.bread(), BreadType::Wheat);
        assert!(!italian.is_toasted());
        assert_eq!(
            names(&italian),
            ["Ham", "Salami", "Provolone", "Lettuce", "Tomatoes", "Onions", "Vinaigrette"]
        );
    }

    #[test]
    fn test_club_recipe_any_size() {
        for size in SandwichSize::ALL {
            let club = SignatureSandwich::build(SignatureSandwichType::Club, size);
            assert_eq!(club.size(), size);
            assert_eq!(club.bread(), BreadType::White);
            assert!(club.is_toasted());
            assert_eq!(club.toppings(), CLUB.toppings);
            assert_eq!(
                names(&club),
                ["Ham", "Chicken", "Bacon", "Swiss", "Lettuce", "Tomatoes", "Mayo"]
            );
        }
    }

    #[test]
    fn test_no_preset_is_extra() {
        for signature in SignatureSandwichType::ALL {
            assert!(signature.recipe().toppings.iter().all(|t| !t.is_extra()));
        }
    }

    #[test]
    fn test_club_price() {
        // Medium: 7.00 + 3 × 2.00 + 1.50
        let club = SignatureSandwich::build(SignatureSandwichType::Club, SandwichSize::Medium);
        assert_eq!(club.price().cents(), 1450);
    }

    #[test]
    fn test_customization_after_build() {
        let mut blt = SignatureSandwich::build(SignatureSandwichType::Blt, SandwichSize::Small);
        blt.add_topping(Topping::extra_cheese(CheeseType::American));
        blt.add_topping(Topping::side(SideType::AuJus));

        assert_eq!(blt.toppings().len(), 6);
        assert_eq!(blt.toppings().last(), Some(&Topping::side(SideType::AuJus)));
        // 5.50 + 1.00 bacon + 0.75 + 0.30 extra american
        assert_eq!(blt.price().cents(), 755);
        // The recipe table is untouched.
        assert_eq!(BLT.toppings.len(), 4);
    }

    #[test]
    fn test_signature_description() {
        let blt = SignatureSandwich::build(SignatureSandwichType::Blt, SandwichSize::Small);
        assert_eq!(
            blt.description(),
            "BLT Signature - 4\" White Sandwich (Toasted) - Toppings: Bacon, Lettuce, Tomatoes, Mayo"
        );
    }

    #[test]
    fn test_signature_detailed_description() {
        let philly = SignatureSandwich::build(
            SignatureSandwichType::PhillyCheesesteak,
            SandwichSize::Small,
        );
        let detailed = philly.detailed_description();
        assert_eq!(detailed, philly.sandwich().detailed_description());
        assert!(detailed.starts_with("4\" Wrap Sandwich\n"));
        assert!(!detailed.contains("Signature"));
        assert!(detailed.contains("\n  Meats: Steak (+$1.00)\n"));
        assert!(detailed.contains("\n  Cheese: Provolone (+$0.75)\n"));
        assert!(detailed.contains("\n  Toppings: Peppers, Onions\n"));
        assert!(detailed.ends_with("  Total: $7.25"));
    }

    #[test]
    fn test_display_names() {
        let labels: Vec<&str> = SignatureSandwichType::ALL
            .iter()
            .map(|s| s.display_name())
            .collect();
        assert_eq!(labels, ["BLT", "Philly Cheesesteak", "Italian Sub", "Club Sandwich"]);
        assert!(SignatureSandwichType::Club.blurb().contains("swiss"));
    }
}
