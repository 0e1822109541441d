//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point:                                                   │
//! │    7.00 + 2.00 + 1.50 + 0.60 = 11.100000000000001  ❌ WRONG!           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    700 + 200 + 150 + 60 = 1110 cents = $11.10                          │
//! │                                                                         │
//! │  Every menu price is an exact cent amount, so a sandwich total is      │
//! │  plain integer addition with no rounding step at all.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use deli_core::money::Money;
//!
//! let base = Money::from_cents(700); // $7.00
//! let bacon = Money::from_cents(200); // $2.00
//! assert_eq!((base + bacon).to_string(), "$9.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  SandwichPricing ──► Topping::price ──► Sandwich::price ──┐            │
/// │                                                            │            │
/// │  DrinkPricing ─────► Drink::price ─────────────────────────┼──► Order   │
/// │                                                            │   total    │
/// │  CHIPS_PRICE ──────► Chips::price ─────────────────────────┘            │
/// │                                                                         │
/// │  Displayed as "$10.50" on order summaries and receipts                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use deli_core::money::Money;
    ///
    /// let price = Money::from_cents(550); // Represents $5.50
    /// assert_eq!(price.cents(), 550);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ```rust
    /// use deli_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(8, 50).cents(), 850);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC`, the format used on descriptions and receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1050);
        assert_eq!(money.cents(), 1050);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(7, 0).cents(), 700);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(30)), "$0.30");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Money::from_cents(700);
        total += Money::from_cents(200);
        assert_eq!((total + Money::from_cents(150)).cents(), 1050);
    }

    #[test]
    fn test_sum() {
        let prices = [
            Money::from_cents(700),
            Money::from_cents(200),
            Money::from_cents(150),
        ];
        let owned: Money = prices.iter().copied().sum();
        let borrowed: Money = prices.iter().sum();
        assert_eq!(owned.cents(), 1050);
        assert_eq!(borrowed, owned);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    /// Float addition of these menu prices drifts; cents do not.
    #[test]
    fn test_no_float_drift() {
        let total: Money = [700, 200, 150, 60]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.to_string(), "$11.10");
    }
}
