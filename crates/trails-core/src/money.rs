//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Box prices are exact cents ($6.00 = 600), and a booth total is       │
//! │    cents × a box count. Integer arithmetic makes every total exact,     │
//! │    so "round to 2 decimal places" needs no rounding step at all.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use trails_core::money::Money;
//!
//! let box_price = Money::from_cents(600); // $6.00
//! let line_total = box_price * 3;         // $18.00
//! assert_eq!(line_total.cents(), 1800);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64**: headroom for any conceivable troop-season total
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support so totals cross the IPC boundary as-is
///
/// Every monetary value in Cookie Trails flows through this type; only the
/// UI converts to a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use trails_core::money::Money;
    ///
    /// let price = Money::from_cents(700); // $7.00
    /// assert_eq!(price.cents(), 700);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
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

    /// Multiplies a unit price by a box count.
    ///
    /// ```rust
    /// use trails_core::money::Money;
    ///
    /// let box_price = Money::from_cents(600); // $6.00
    /// assert_eq!(box_price.multiply_count(12).cents(), 7200); // one case
    /// ```
    #[inline]
    pub const fn multiply_count(&self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging and reports. The UI formats for display itself
/// to handle localization properly.
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

/// Default money is zero.
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by integer (for box-count calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

/// Summing line totals into a grand total.
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
    fn test_from_cents() {
        let money = Money::from_cents(699);
        assert_eq!(money.cents(), 699);
        assert_eq!(money.dollars(), 6);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(700)), "$7.00");
        assert_eq!(format!("{}", Money::from_cents(605)), "$6.05");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(600);
        let b = Money::from_cents(700);

        assert_eq!((a + b).cents(), 1300);
        assert_eq!((b - a).cents(), 100);
        assert_eq!((a * 3).cents(), 1800);
    }

    #[test]
    fn test_multiply_count() {
        let box_price = Money::from_cents(600);
        assert_eq!(box_price.multiply_count(0).cents(), 0);
        assert_eq!(box_price.multiply_count(57).cents(), 34200);
    }

    #[test]
    fn test_sum() {
        let total: Money = [600, 600, 700]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 1900);
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert!(Money::default().is_zero());
        assert!(!Money::from_cents(1).is_zero());
    }
}
