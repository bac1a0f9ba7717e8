//! # Money Module
//!
//! Provides the `Money` type for the rounded quote aggregates.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LINE LEVEL (f64, never rounded)                                        │
//! │    gross = qty × price, discount, vat, line total                       │
//! │                         │                                               │
//! │                         ▼  Σ over all lines                             │
//! │  AGGREGATE LEVEL (Money, integer kuruş)                                 │
//! │    Money::round_from_major(Σ) ──► subtotal / discount / vat             │
//! │    grand total = subtotal - discount + vat   (exact integer math)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The line level stays in floating point because quantities (kg, m³, hours)
//! and prices are free decimals entered by the user. Once a sum is rounded to
//! two decimals it becomes a `Money`, and from then on nothing drifts.
//!
//! ## Usage
//! ```rust
//! use acerler_core::money::Money;
//!
//! let subtotal = Money::round_from_major(200.0);
//! let discount = Money::round_from_major(20.0);
//! let vat = Money::round_from_major(36.0);
//!
//! assert_eq!((subtotal - discount + vat).kurus(), 21_600);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

/// Rounds to two decimals, halves going up.
///
/// Matches the web form's `Math.round(x * 100) / 100`, so stored totals stay
/// bit-compatible with quotes created there.
///
/// ## Example
/// ```rust
/// use acerler_core::money::round2;
///
/// assert_eq!(round2(36.5), 36.5);
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(-0.125), -0.12);
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0 + 0.5).floor() / 100.0
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in kuruş (1/100 lira, or cents for USD/EUR quotes).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as `subtotal - discount` go negative
/// - **Saturating arithmetic**: absurd inputs clamp at `i64::MAX` instead of panicking
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as kuruş**: the wire layer converts to decimal lira itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kuruş.
    #[inline]
    pub const fn from_kurus(kurus: i64) -> Self {
        Money(kurus)
    }

    /// Rounds a decimal major-unit amount (lira) to the nearest kuruş.
    ///
    /// Halves round up, and non-finite input becomes zero. Amounts beyond the
    /// i64 range clamp to its bounds.
    ///
    /// ## Example
    /// ```rust
    /// use acerler_core::money::Money;
    ///
    /// assert_eq!(Money::round_from_major(36.5).kurus(), 3650);
    /// assert_eq!(Money::round_from_major(0.005).kurus(), 1);
    /// assert_eq!(Money::round_from_major(f64::NAN).kurus(), 0);
    /// ```
    pub fn round_from_major(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::zero();
        }
        Money((amount * 100.0 + 0.5).floor() as i64)
    }

    /// Returns the value in kuruş.
    #[inline]
    pub const fn kurus(&self) -> i64 {
        self.0
    }

    /// Returns the whole-lira portion.
    #[inline]
    pub const fn lira(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the kuruş portion (always 0-99).
    #[inline]
    pub const fn kurus_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the amount as decimal lira, as the backend stores it.
    ///
    /// ## Example
    /// ```rust
    /// use acerler_core::money::Money;
    ///
    /// assert_eq!(Money::from_kurus(26_650).to_major(), 266.5);
    /// ```
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-style display (`1234.50`). Locale formatting belongs to the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.lira().abs(), self.kurus_part())
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
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
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
    fn test_from_kurus() {
        let money = Money::from_kurus(21_650);
        assert_eq!(money.kurus(), 21_650);
        assert_eq!(money.lira(), 216);
        assert_eq!(money.kurus_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_kurus(21_600).to_string(), "216.00");
        assert_eq!(Money::from_kurus(5).to_string(), "0.05");
        assert_eq!(Money::from_kurus(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_round_from_major_half_up() {
        assert_eq!(Money::round_from_major(0.125).kurus(), 13);
        assert_eq!(Money::round_from_major(2.675).kurus(), 267); // 267.49999... in f64
        assert_eq!(Money::round_from_major(-0.125).kurus(), -12);
        assert_eq!(Money::round_from_major(f64::INFINITY).kurus(), 0);
    }

    #[test]
    fn test_round2_matches_money_rounding() {
        for value in [0.0, 0.1 + 0.2, 36.5, 199.995, 1234.5678] {
            assert_eq!(round2(value), Money::round_from_major(value).to_major());
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_kurus(25_000);
        let b = Money::from_kurus(2_000);
        let c = Money::from_kurus(3_650);

        assert_eq!((a - b + c).kurus(), 26_650);

        let mut running = Money::zero();
        running += a;
        running -= b;
        assert_eq!(running.kurus(), 23_000);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let huge = Money::round_from_major(1e20);
        assert_eq!(huge.kurus(), i64::MAX);
        assert_eq!(Money::round_from_major(-1e20).kurus(), i64::MIN);

        assert_eq!((huge + huge).kurus(), i64::MAX);
        assert_eq!((huge - Money::zero() + huge).kurus(), i64::MAX);
        assert_eq!((Money::from_kurus(i64::MIN) - huge).kurus(), i64::MIN);

        let mut running = huge;
        running += huge;
        assert_eq!(running.kurus(), i64::MAX);
        running = Money::from_kurus(i64::MIN);
        running -= huge;
        assert_eq!(running.kurus(), i64::MIN);

        assert!(!huge.to_string().is_empty());
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 5].into_iter().map(Money::from_kurus).sum();
        assert_eq!(total.kurus(), 355);
    }
}
