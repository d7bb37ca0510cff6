//! # Money Module
//!
//! Provides the `Money` type for ticket prices and purchase totals.
//!
//! ## Integer Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are whole units of an abstract currency:                        │
//! │                                                                         │
//! │    ADULT  = 20                                                          │
//! │    CHILD  = 10                                                          │
//! │    INFANT =  0                                                          │
//! │                                                                         │
//! │  2 × ADULT + 1 × CHILD + 1 × INFANT = 50                                │
//! │                                                                         │
//! │  No floats anywhere: the payment gateway is charged the exact integer  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tickets_core::money::Money;
//!
//! let adult = Money::from_units(20);
//! let child = Money::from_units(10);
//!
//! let total = adult * 2 + child;
//! assert_eq!(total.units(), 50);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: Matches the integer amount the payment gateway takes
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Newtype serde**: Serializes as a bare number (`50`)
///
/// ## Where Money is Used
/// ```text
/// PurchasePolicy.adult_price ──┐
/// PurchasePolicy.child_price ──┼──► TicketCounts::outcome ──► total_amount
/// PurchasePolicy.infant_price ─┘                                  │
///                                                                 ▼
///                                                 PaymentGateway::charge
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole units.
    ///
    /// ## Example
    /// ```rust
    /// use tickets_core::money::Money;
    ///
    /// let price = Money::from_units(20);
    /// assert_eq!(price.units(), 20);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a ticket quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tickets_core::money::Money;
    ///
    /// let unit_price = Money::from_units(20);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 60);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the bare unit count; the currency itself is not modelled.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
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

/// Multiplication by a ticket quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(50);
        assert_eq!(money.units(), 50);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(50)), "50");
        assert_eq!(format!("{}", Money::zero()), "0");
    }

    #[test]
    fn test_arithmetic() {
        let adult = Money::from_units(20);
        let child = Money::from_units(10);

        assert_eq!((adult + child).units(), 30);
        assert_eq!((adult * 2).units(), 40);

        let mut running = Money::zero();
        running += adult;
        running += child;
        assert_eq!(running.units(), 30);
    }

    #[test]
    fn test_sum() {
        let total: Money = [20, 20, 10, 0]
            .into_iter()
            .map(Money::from_units)
            .sum();
        assert_eq!(total.units(), 50);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::from_units(50)).unwrap();
        assert_eq!(json, "50");

        let back: Money = serde_json::from_str("20").unwrap();
        assert_eq!(back, Money::from_units(20));
    }
}
