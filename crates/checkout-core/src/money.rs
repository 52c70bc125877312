//! # Money Module
//!
//! Provides the `Money` and `Rate` types for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  THE INTEGER CENTS PROBLEM                                              │
//! │                                                                         │
//! │  VIP discount on $1100.49 = 20% = $220.098                             │
//! │    In cents: 22009.8 → must round somewhere  ❌ LOSSY                   │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimal                                          │
//! │    1100.49 × 0.20 = 220.0980 exactly                                   │
//! │    Rounding only happens when a value is DISPLAYED                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::{Money, Rate};
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(99999); // $999.99
//! let total = price + Money::from_cents(2550); // $1025.49
//!
//! let discount = total * Rate::from_bps(1000); // 10%
//! assert_eq!(discount, Money::new(Decimal::new(102549, 3))); // $102.549, not rounded
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents an exact monetary amount.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values for refunds and exact
///   sub-cent intermediate results from percentage discounts
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **No implicit rounding**: Arithmetic keeps full precision; only
///   `Display` rounds, and only for presentation
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Product.price ──┬──► Cart.total                                        │
/// │                  │                                                      │
/// │                  └──► Order total ──► DiscountStrategy ──► discount     │
/// │                                                                         │
/// │  final_amount = total - discount                                        │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.amount(), Decimal::new(1099, 2));
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Rounds to whole cents, half away from zero.
    ///
    /// Not used by any calculation. Callers that need to settle an amount
    /// (print it, charge it) round explicitly with this.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let exact = Money::new(Decimal::new(220098, 3)); // $220.098
    /// assert_eq!(exact.round_to_cents(), Money::from_cents(22010));
    /// ```
    pub fn round_to_cents(&self) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Applies a rate to this amount (`amount × rate`), exactly.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::{Money, Rate};
    ///
    /// let subtotal = Money::from_cents(100000); // $1000.00
    /// let discount = subtotal.apply_rate(Rate::from_bps(500)); // 5%
    /// assert_eq!(discount, Money::from_cents(5000)); // $50.00
    /// ```
    #[inline]
    pub fn apply_rate(&self, rate: Rate) -> Money {
        Money(self.0 * rate.fraction())
    }
}

// =============================================================================
// Rate Type
// =============================================================================

/// A fraction of an amount, used for discount percentages.
///
/// ## Why Two Constructors?
/// - `from_bps`: 1 basis point = 0.01% = 1/10000, so 500 bps = 5%.
///   Integer-friendly for config files and environment variables.
/// - `from_fraction`: the raw multiplier (`0.05`), for code that already
///   holds a `Decimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a rate from basis points (1000 = 10%).
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::new(i64::from(bps), 4))
    }

    /// Creates a rate from a fraction (`0.10` = 10%).
    #[inline]
    pub const fn from_fraction(fraction: Decimal) -> Self {
        Rate(fraction)
    }

    /// Returns the multiplier (`0.10` for 10%).
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage (`10` for 10%), for display.
    pub fn percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(Decimal::ZERO)
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as dollars rounded to cents.
///
/// ## Note
/// Rounding here is presentation only; `$220.098` prints as `$220.10` but
/// stays `220.098` in every calculation.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let mut cents = self.round_to_cents().0.abs();
        cents.rescale(2);
        write!(f, "{}${}", sign, cents)
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

/// Multiplication by a rate (for discounts).
impl Mul<Rate> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, rate: Rate) -> Self {
        self.apply_rate(rate)
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
