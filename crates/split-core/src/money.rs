//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A shared bill recomputed on every keystroke by several phones at      │
//! │  once cannot tolerate drift: everyone must see the same total.         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    Floating point appears exactly once, at the text-parsing boundary,  │
//! │    and is rounded to an integer immediately. Every stored, summed, or  │
//! │    displayed amount is an i64 count of minor units.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use split_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let price = Money::from_cents(1099);
//!
//! // Parse user-typed text (exponent 2 => two fractional digits)
//! let typed = Money::parse_decimal("10.99", 2);
//! assert_eq!(typed, price);
//!
//! // Malformed input degrades to zero, it never errors
//! assert_eq!(Money::parse_decimal("abc", 2), Money::zero());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Intermediate arithmetic may dip below zero before the
///   engine floors a result; the sign survives until [`Money::clamp_floor_zero`]
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// The unit is whatever the surrounding currency code says it is. `Money`
/// itself is currency-blind; the exponent only matters at the parse and
/// format boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use split_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Floors the value at zero.
    ///
    /// A bill never shows negative money: discounts larger than a line's
    /// gross, or adversarial input, land on exactly zero.
    ///
    /// ## Example
    /// ```rust
    /// use split_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-250).clamp_floor_zero().cents(), 0);
    /// assert_eq!(Money::from_cents(250).clamp_floor_zero().cents(), 250);
    /// ```
    #[inline]
    pub const fn clamp_floor_zero(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Parses user-typed decimal text into minor units.
    ///
    /// ## Degradation Rules
    /// This is the live-editing boundary: partial or invalid input is the
    /// normal transient state, not an exceptional one, so nothing here can
    /// fail.
    ///
    /// ```text
    /// "10.99", exponent 2  ──►  1099
    /// "5",     exponent 0  ──►  5
    /// "5.555", exponent 2  ──►  556   (round half away from zero)
    /// ""                   ──►  0     (parse failure)
    /// "abc"                ──►  0     (parse failure)
    /// "NaN"                ──►  0     (non-finite)
    /// "-5"                 ──►  0     (negative money is clamped)
    /// ```
    ///
    /// Rounding is round-half-away-from-zero (`f64::round`). On this
    /// engine's non-negative domain that is identical to rounding half up.
    pub fn parse_decimal(text: &str, exponent: u32) -> Money {
        let Ok(value) = text.trim().parse::<f64>() else {
            return Money::zero();
        };
        if !value.is_finite() {
            return Money::zero();
        }
        let factor = 10f64.powi(exponent as i32);
        // `as i64` saturates on overflow, so absurdly large input stays defined
        Money((value * factor).round() as i64).clamp_floor_zero()
    }

    /// Computes `percent` of this amount, rounded half away from zero.
    ///
    /// Used for the per-unit percentage-discount fallback: 10% of 350
    /// minor units is 35, 10% of 315 is 32.
    pub fn percent_of(&self, percent: f64) -> Money {
        if !percent.is_finite() {
            return Money::zero();
        }
        Money((self.0 as f64 * percent / 100.0).round() as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use split_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Renders the amount as plain decimal text with exactly `exponent`
    /// fractional digits and no symbol.
    ///
    /// The inverse of [`Money::parse_decimal`], used to seed editable form
    /// fields from canonical minor units.
    ///
    /// ## Example
    /// ```rust
    /// use split_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(500).to_decimal_string(2), "5.00");
    /// assert_eq!(Money::from_cents(5).to_decimal_string(0), "5");
    /// ```
    pub fn to_decimal_string(&self, exponent: u32) -> String {
        if exponent == 0 {
            return self.0.to_string();
        }
        let factor = 10i64.pow(exponent);
        let sign = if self.0 < 0 { "-" } else { "" };
        let major = (self.0 / factor).abs();
        let minor = (self.0 % factor).abs();
        format!("{sign}{major}.{minor:0width$}", width = exponent as usize)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and assumes a two-digit currency. Use
/// [`crate::currency::format_minor_units`] for real display, which knows
/// the symbol and exponent.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
