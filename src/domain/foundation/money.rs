//! Money value object backed by decimal arithmetic.
//!
//! Amounts are currency values; summing them with floating point drifts, so
//! everything goes through `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::ValidationError;

/// A non-negative decimal currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a Money value, rejecting negative amounts.
    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() {
            return Err(ValidationError::invalid_format(
                "amount",
                "amount cannot be negative",
            ));
        }
        Ok(Self(amount))
    }

    /// Creates a Money value from whole currency units (tests, fixtures).
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the inner decimal.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Whether this amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(Money::new(dec("-0.01")).is_err());
        assert!(Money::new(dec("0.00")).is_ok());
    }

    #[test]
    fn sums_without_drift() {
        // Classic float trap: 0.1 + 0.2 != 0.3 in binary floating point.
        let total: Money = ["0.1", "0.2"]
            .into_iter()
            .map(|d| Money::new(dec(d)).unwrap())
            .sum();
        assert_eq!(total.as_decimal(), dec("0.3"));
    }

    #[test]
    fn displays_with_two_decimal_places() {
        let m = Money::new(dec("25.5")).unwrap();
        assert_eq!(m.to_string(), "25.50");
    }

    #[test]
    fn zero_is_zero() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::from_units(1).is_zero());
    }
}
