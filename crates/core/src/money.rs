//! Monetary amounts.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single-currency amount.
///
/// Backed by a base-10 decimal so that sums of deposits are exact. The sign is
/// not restricted here: validation belongs to the operation that consumes the
/// amount (deposits reject non-positive values, withdrawals do not).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

/// Returned when text cannot be read as an amount.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid amount '{input}'")]
pub struct ParseMoneyError {
    pub input: String,
}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Whole currency units, e.g. `Money::from_units(100)` is `$100.00`.
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Smallest currency unit (cents), e.g. `Money::from_cents(1050)` is `$10.50`.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Money)
            .map_err(|_| ParseMoneyError {
                input: trimmed.to_string(),
            })
    }
}

/// At least two fractional digits, never rounded, no currency symbol:
/// `150.00`, `-5.25`, `0.004`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut shown = self.0;
        if shown.scale() < 2 {
            shown.rescale(2);
        }
        core::fmt::Display::fmt(&shown, f)
    }
}
