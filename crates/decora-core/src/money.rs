//! # Money Module
//!
//! Provides the `Rupees` type for handling monetary values safely.
//!
//! ## Why Integer Rupees?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Whole Rupees as Unsigned Integers                        │
//! │    Every price in the catalog is a whole-rupee amount, every total      │
//! │    is a sum of count × price products. No fractions ever appear in     │
//! │    a calculation, so nothing can drift.                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use decora_core::money::Rupees;
//!
//! // Create from whole rupees (the only constructor)
//! let kitchen = Rupees::new(220_000);
//!
//! // Arithmetic operations
//! let three_wardrobes = Rupees::new(93_519) * 3;
//! let total = kitchen + three_wardrobes;
//! assert_eq!(total.amount(), 500_557);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Rupees Type
// =============================================================================

/// A monetary value in whole rupees.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: Catalog prices and item counts are never negative,
///   so totals cannot be negative either. The type makes that unrepresentable.
/// - **Single field tuple struct**: Zero-cost abstraction over u64
/// - **Derives**: Full serde support; serializes as a bare integer
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Rupees(u64);

impl Rupees {
    /// Creates a value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use decora_core::money::Rupees;
    ///
    /// let base = Rupees::new(110_000);
    /// assert_eq!(base.amount(), 110_000);
    /// ```
    #[inline]
    pub const fn new(rupees: u64) -> Self {
        Rupees(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Returns zero rupees.
    #[inline]
    pub const fn zero() -> Self {
        Rupees(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by an item count.
    ///
    /// ## Example
    /// ```rust
    /// use decora_core::money::Rupees;
    ///
    /// let unit_price = Rupees::new(93_519);
    /// let line_total = unit_price.multiply_count(3);
    /// assert_eq!(line_total.amount(), 280_557);
    /// ```
    #[inline]
    pub const fn multiply_count(&self, count: u32) -> Self {
        Rupees(self.0 * count as u64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the amount with a rupee sign.
///
/// ## Note
/// This is for debugging and plain output. Use
/// [`crate::format::format_indian_price`] for the compact lakh/thousand
/// rendering shown to users.
impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

/// Addition of two Rupees values.
impl Add for Rupees {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Rupees(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Rupees {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by an item count.
impl Mul<u32> for Rupees {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Rupees(self.0 * count as u64)
    }
}

/// Summation over line totals.
impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rupees::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_amount() {
        let money = Rupees::new(110_000);
        assert_eq!(money.amount(), 110_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rupees::new(795_557)), "₹795557");
        assert_eq!(format!("{}", Rupees::new(0)), "₹0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Rupees::new(170_000);
        let b = Rupees::new(220_000);

        assert_eq!((a + b).amount(), 390_000);

        let mut acc = a;
        acc += b;
        assert_eq!(acc.amount(), 390_000);

        let result: Rupees = Rupees::new(93_519) * 3;
        assert_eq!(result.amount(), 280_557);
    }

    #[test]
    fn test_multiply_count() {
        let unit_price = Rupees::new(70_000);
        assert_eq!(unit_price.multiply_count(2).amount(), 140_000);
        assert_eq!(unit_price.multiply_count(0).amount(), 0);
    }

    #[test]
    fn test_sum() {
        let total: Rupees = [Rupees::new(1), Rupees::new(2), Rupees::new(3)]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), 6);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Rupees::zero();
        assert!(zero.is_zero());
        assert_eq!(zero, Rupees::default());

        let positive = Rupees::new(100);
        assert!(!positive.is_zero());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Rupees::new(170_000)).unwrap();
        assert_eq!(json, "170000");

        let back: Rupees = serde_json::from_str("170000").unwrap();
        assert_eq!(back, Rupees::new(170_000));
    }
}
