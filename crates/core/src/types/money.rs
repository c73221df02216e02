//! Integer money amounts and price formatting.
//!
//! Amounts are always held in the smallest currency unit (for VND, the đồng
//! itself) as a `u64`. There is no floating point anywhere in cart math, so
//! totals never drift. Operators saturate at `u64::MAX` instead of
//! wrapping; the `checked_*` methods report overflow to callers that must
//! reject it.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Symbol appended when a [`Money`] value is displayed without an explicit one.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "đ";

const THOUSANDS_SEPARATOR: char = '.';

/// A non-negative amount in the smallest currency unit.
///
/// ```
/// use shopapp_core::Money;
///
/// let price = Money::new(1_590_000);
/// assert_eq!((price * 2).amount(), 3_180_000);
/// assert_eq!(price.to_string(), "1.590.000 đ");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a new amount from minor units.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Returns true for the zero amount.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, saturating on overflow.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Multiply by a quantity, or `None` if the result does not fit.
    #[must_use]
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(quantity)).map(Self)
    }

    /// Add two amounts, or `None` if the result does not fit.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(amount) => Some(Self(amount)),
            None => None,
        }
    }

    /// Render with thousands separators and the given currency symbol.
    #[must_use]
    pub fn display_with(self, symbol: &str) -> String {
        let formatted = format_amount(self.0);
        if symbol.is_empty() {
            formatted
        } else {
            format!("{formatted} {symbol}")
        }
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl From<Money> for u64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        self.times(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

/// Format an amount with `.` inserted every three digits from the right.
///
/// No currency conversion and no rounding happen here; this operates on the
/// decimal string of the integer.
///
/// ```
/// use shopapp_core::format_amount;
///
/// assert_eq!(format_amount(10_990_000), "10.990.000");
/// assert_eq!(format_amount(999), "999");
/// ```
#[must_use]
pub fn format_amount(amount: u64) -> String {
    format_amount_with(amount, THOUSANDS_SEPARATOR)
}

/// Format an amount with a custom thousands separator.
#[must_use]
pub fn format_amount_with(amount: u64, separator: char) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}
