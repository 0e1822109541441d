//! # Products
//!
//! Purchasable line items: sandwiches, signature sandwiches, drinks and chips.
//!
//! ## Product Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product (closed sum type)                                              │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌───────────────────┐  ┌─────────┐  ┌─────────┐ │
//! │  │    Sandwich      │  │ SignatureSandwich │  │  Drink  │  │  Chips  │ │
//! │  │  size, bread     │  │  kind + Sandwich  │  │  size   │  │  kind   │ │
//! │  │  toasted         │  │  (pre-populated)  │  │  flavor │  │         │ │
//! │  │  toppings[]      │  │                   │  │         │  │         │ │
//! │  └──────────────────┘  └───────────────────┘  └─────────┘  └─────────┘ │
//! │                                                                         │
//! │  price():       base + Σ topping.price(size) │ size price │ flat 1.50  │
//! │  description(): one-line summary                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::menu::BreadType;
use crate::money::Money;
use crate::pricing::{DrinkSize, SandwichSize, CHIPS_PRICE};
use crate::signature::SignatureSandwich;
use crate::topping::{Topping, ToppingCategory};

// =============================================================================
// Sandwich
// =============================================================================

/// A build-your-own sandwich.
///
/// ## Invariants
/// - Toppings keep insertion order (receipts print them in that order)
/// - Duplicates and any mix of categories are allowed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sandwich {
    size: SandwichSize,
    bread: BreadType,
    toasted: bool,
    toppings: Vec<Topping>,
}

impl Sandwich {
    /// Creates an untoasted sandwich with no toppings.
    pub fn new(size: SandwichSize, bread: BreadType) -> Self {
        Sandwich {
            size,
            bread,
            toasted: false,
            toppings: Vec::new(),
        }
    }

    /// Appends a topping. No combination is rejected.
    pub fn add_topping(&mut self, topping: Topping) {
        self.toppings.push(topping);
    }

    pub fn set_toasted(&mut self, toasted: bool) {
        self.toasted = toasted;
    }

    pub fn size(&self) -> SandwichSize {
        self.size
    }

    pub fn bread(&self) -> BreadType {
        self.bread
    }

    pub fn is_toasted(&self) -> bool {
        self.toasted
    }

    /// Toppings in insertion order.
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Base price for the size plus every topping priced at that size.
    pub fn price(&self) -> Money {
        self.size.base_price()
            + self
                .toppings
                .iter()
                .map(|t| t.price(self.size))
                .sum::<Money>()
    }

    /// `8" Wheat Sandwich (Toasted)`
    fn header(&self) -> String {
        let mut header = format!("{} {} Sandwich", self.size, self.bread);
        if self.toasted {
            header.push_str(" (Toasted)");
        }
        header
    }

    /// One-line summary: size, bread, toasted marker and topping names.
    ///
    /// ```rust
    /// use deli_core::{BreadType, MeatType, Sandwich, SandwichSize, Topping};
    ///
    /// let mut sandwich = Sandwich::new(SandwichSize::Medium, BreadType::Rye);
    /// sandwich.add_topping(Topping::extra_meat(MeatType::Ham));
    /// assert_eq!(sandwich.description(), "8\" Rye Sandwich - Toppings: Extra Ham");
    /// ```
    pub fn description(&self) -> String {
        let mut line = self.header();
        if !self.toppings.is_empty() {
            line.push_str(" - Toppings: ");
            line.push_str(&join_names(self.toppings.iter(), Topping::display_name));
        }
        line
    }

    /// Receipt rendering, toppings grouped by category.
    ///
    /// ## Layout
    /// ```text
    /// 8" Wheat Sandwich (Toasted)
    ///   Base Price: $7.00
    ///   Meats: Bacon (+$2.00)
    ///   Cheese: Cheddar (+$1.50)
    ///   Toppings: Lettuce
    ///   Sauces: Mayo
    ///   Sides: Au Jus
    ///   Total: $10.50
    /// ```
    ///
    /// Empty categories are skipped. Within a category toppings keep their
    /// insertion order. Meats, cheese and sides show a price when it is
    /// above zero; regular toppings and sauces never do.
    pub fn detailed_description(&self) -> String {
        let mut out = self.header();
        out.push_str(&format!("\n  Base Price: {}", self.size.base_price()));

        for category in ToppingCategory::ALL {
            let mut group = self
                .toppings
                .iter()
                .filter(|t| t.category() == category)
                .peekable();
            if group.peek().is_none() {
                continue;
            }

            let names = match category {
                ToppingCategory::Meat | ToppingCategory::Cheese | ToppingCategory::Side => {
                    join_names(group, |t| self.priced_name(t))
                }
                ToppingCategory::Regular | ToppingCategory::Sauce => {
                    join_names(group, |t| t.name().to_string())
                }
            };
            out.push_str(&format!("\n  {}: {}", category_label(category), names));
        }

        out.push_str(&format!("\n  Total: {}", self.price()));
        out
    }

    /// `Extra Bacon (+$4.50)`, or just the name when free.
    fn priced_name(&self, topping: &Topping) -> String {
        let price = topping.price(self.size);
        if price.is_positive() {
            format!("{} (+{})", topping, price)
        } else {
            topping.display_name()
        }
    }
}

fn category_label(category: ToppingCategory) -> &'static str {
    match category {
        ToppingCategory::Meat => "Meats",
        ToppingCategory::Cheese => "Cheese",
        ToppingCategory::Regular => "Toppings",
        ToppingCategory::Sauce => "Sauces",
        ToppingCategory::Side => "Sides",
    }
}

fn join_names<'a, I, F>(toppings: I, name: F) -> String
where
    I: Iterator<Item = &'a Topping>,
    F: Fn(&Topping) -> String,
{
    toppings.map(name).collect::<Vec<_>>().join(", ")
}

// =============================================================================
// Drink
// =============================================================================

/// A fountain drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    size: DrinkSize,
    flavor: String,
}

impl Drink {
    pub fn new(size: DrinkSize, flavor: impl Into<String>) -> Self {
        Drink {
            size,
            flavor: flavor.into(),
        }
    }

    pub fn size(&self) -> DrinkSize {
        self.size
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    pub fn price(&self) -> Money {
        self.size.price()
    }

    /// `Medium Coke - $2.50`
    pub fn description(&self) -> String {
        format!("{} {} - {}", self.size, self.flavor, self.price())
    }
}

// =============================================================================
// Chips
// =============================================================================

/// A bag of chips. Every kind costs [`CHIPS_PRICE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chips {
    kind: String,
}

impl Chips {
    pub fn new(kind: impl Into<String>) -> Self {
        Chips { kind: kind.into() }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn price(&self) -> Money {
        CHIPS_PRICE
    }

    /// `Lays Chips - $1.50`
    pub fn description(&self) -> String {
        format!("{} Chips - {}", self.kind, self.price())
    }
}

// =============================================================================
// Product
// =============================================================================

/// Discriminant of a [`Product`], for logging and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Sandwich,
    Signature,
    Drink,
    Chips,
}

/// One line item in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Product {
    Sandwich(Sandwich),
    Signature(SignatureSandwich),
    Drink(Drink),
    Chips(Chips),
}

impl Product {
    pub fn price(&self) -> Money {
        match self {
            Product::Sandwich(s) => s.price(),
            Product::Signature(s) => s.price(),
            Product::Drink(d) => d.price(),
            Product::Chips(c) => c.price(),
        }
    }

    /// One-line summary.
    pub fn description(&self) -> String {
        match self {
            Product::Sandwich(s) => s.description(),
            Product::Signature(s) => s.description(),
            Product::Drink(d) => d.description(),
            Product::Chips(c) => c.description(),
        }
    }

    /// The form printed on order summaries: detailed for sandwiches,
    /// one-line for everything else.
    pub fn receipt_description(&self) -> String {
        match self {
            Product::Sandwich(s) => s.detailed_description(),
            Product::Signature(s) => s.detailed_description(),
            Product::Drink(d) => d.description(),
            Product::Chips(c) => c.description(),
        }
    }

    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Sandwich(_) => ProductKind::Sandwich,
            Product::Signature(_) => ProductKind::Signature,
            Product::Drink(_) => ProductKind::Drink,
            Product::Chips(_) => ProductKind::Chips,
        }
    }

    /// Plain and signature sandwiches both count.
    pub fn is_sandwich(&self) -> bool {
        matches!(self, Product::Sandwich(_) | Product::Signature(_))
    }

    /// Drinks and chips: what a sandwich-less order must contain.
    pub fn is_side_item(&self) -> bool {
        matches!(self, Product::Drink(_) | Product::Chips(_))
    }
}

impl From<Sandwich> for Product {
    fn from(sandwich: Sandwich) -> Self {
        Product::Sandwich(sandwich)
    }
}

impl From<SignatureSandwich> for Product {
    fn from(sandwich: SignatureSandwich) -> Self {
        Product::Signature(sandwich)
    }
}

impl From<Drink> for Product {
    fn from(drink: Drink) -> Self {
        Product::Drink(drink)
    }
}

impl From<Chips> for Product {
    fn from(chips: Chips) -> Self {
        Product::Chips(chips)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
