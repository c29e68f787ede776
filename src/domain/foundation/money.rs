//! Money value object stored as integer cents.
//!
//! Persisted records carry amounts as plain decimal numbers (`1080.0`), so the
//! serde representation converts to and from `f64`, rounding to the nearest
//! cent on the way in. All arithmetic happens on cents.
//!
//! Parsed amounts are bounded by [`Money::MAX`], and arithmetic saturates at
//! the `i64` limits instead of overflowing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use super::ValidationError;

/// A currency amount in BRL, held as cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero reais.
    pub const ZERO: Self = Self(0);

    /// Largest magnitude accepted from decimal input: R$ 100 bilhões.
    pub const MAX: Self = Self(10_000_000_000_000);

    /// Creates an amount from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole reais.
    pub const fn from_reais(reais: i64) -> Self {
        Self(reais * 100)
    }

    /// Creates an amount from a decimal value, rounding to the nearest cent.
    /// Values beyond [`Money::MAX`] in either direction are rejected.
    pub fn from_decimal(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format("value", "amount must be finite"));
        }
        let cents = (value * 100.0).round();
        let max = Self::MAX.0 as f64;
        if cents.abs() > max {
            return Err(ValidationError::out_of_range(
                "value",
                -Self::MAX.0,
                Self::MAX.0,
                cents.clamp(i64::MIN as f64, i64::MAX as f64) as i64,
            ));
        }
        Ok(Self(cents as i64))
    }

    /// Creates a non-negative amount from a decimal value.
    pub fn try_non_negative(value: f64) -> Result<Self, ValidationError> {
        let money = Self::from_decimal(value)?;
        if money.is_negative() {
            return Err(ValidationError::out_of_range("value", 0, Self::MAX.0, money.0));
        }
        Ok(money)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount as a decimal value.
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity.
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Formats as Brazilian currency: `R$ 4.680,00`.
    pub fn to_brl(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = (abs / 100).to_string();
        let cents = abs % 100;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        format!("{}R$ {},{:02}", sign, grouped, cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_brl())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value).map_err(serde::de::Error::custom)
    }
}
