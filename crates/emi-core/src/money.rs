//! # Money Module
//!
//! Provides the `Money` type: an amount rounded to two decimal places.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The EMI formula is evaluated in f64:                                   │
//! │    emi = 1239.8568887451115                                             │
//! │                                                                         │
//! │  Displaying or summing that value directly drifts:                      │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  OUR SOLUTION: round ONCE at the boundary into integer minor units      │
//! │    1239.8568887451115 → 123986 paise → "1239.86"                        │
//! │    Everything downstream (schedule, totals) is exact integer math       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use emi_core::money::Money;
//!
//! let emi = Money::from_major(1239.8568887451115).unwrap();
//! assert_eq!(emi.minor(), 123986);
//! assert_eq!(emi.to_string(), "1239.86");
//!
//! let doubled = emi * 2;
//! assert_eq!(doubled.minor(), 247972);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Minor units per major unit (paise per rupee, cents per dollar).
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (1/100 of the major unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic on differences may go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency**: the shell decides which symbol to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use emi_core::money::Money;
    ///
    /// let amount = Money::from_minor(500000); // 5000.00
    /// assert_eq!(amount.major(), 5000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Rounds a major-unit float to two decimals, half away from zero.
    ///
    /// Returns `None` when the value is NaN, infinite, or outside the range
    /// of `i64` minor units.
    ///
    /// ## Example
    /// ```rust
    /// use emi_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(10.125).unwrap().minor(), 1013);
    /// assert_eq!(Money::from_major(-10.125).unwrap().minor(), -1013);
    /// assert!(Money::from_major(f64::NAN).is_none());
    /// ```
    ///
    /// ## Boundary Note
    /// Rounding applies to the binary value: `1.005` is stored as
    /// `1.00499999...` and rounds to `1.00`.
    pub fn from_major(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let scaled = (value * MINOR_PER_MAJOR as f64).round();

        // i64::MIN as f64 is exactly -2^63; i64::MAX as f64 rounds up to 2^63
        if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            return None;
        }

        Some(Money(scaled as i64))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole major-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` if the sum leaves the `i64` range.
    ///
    /// ## Example
    /// ```rust
    /// use emi_core::money::Money;
    ///
    /// let a = Money::from_minor(i64::MAX - 1);
    /// assert_eq!(a.checked_add(Money::from_minor(1)), Some(Money::from_minor(i64::MAX)));
    /// assert_eq!(a.checked_add(Money::from_minor(2)), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }

    /// Applies a periodic rate and rounds to the nearest minor unit.
    ///
    /// ## Example
    /// ```rust
    /// use emi_core::money::Money;
    ///
    /// let balance = Money::from_minor(10_000_000); // 100000.00
    /// let interest = balance.apply_rate(0.085 / 12.0);
    /// assert_eq!(interest.minor(), 70833); // 708.33
    /// ```
    pub fn apply_rate(&self, rate: f64) -> Money {
        Money((self.0 as f64 * rate).round() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering, no currency symbol.
///
/// The shell prefixes its configured symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a month count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, months: i64) -> Self {
        Money(self.0 * months)
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
