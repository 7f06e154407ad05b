//! Money type for representing Ghana cedi amounts
//!
//! Internally stores amounts in pesewas (i64, hundredths of a cedi) to avoid
//! floating-point precision issues. Provides safe arithmetic, percentage
//! application with half-up rounding, and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as pesewas (hundredths of a cedi)
///
/// Using i64 pesewas keeps fee and split arithmetic exact and makes the
/// half-up rounding rule explicit instead of relying on float formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from pesewas
    pub const fn from_pesewas(pesewas: i64) -> Self {
        Self(pesewas)
    }

    /// Create a Money amount from whole cedis
    pub const fn from_cedis(cedis: i64) -> Self {
        Self(cedis * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in pesewas
    pub const fn pesewas(&self) -> i64 {
        self.0
    }

    /// Get the whole cedis portion (truncated toward zero)
    pub const fn cedis(&self) -> i64 {
        self.0 / 100
    }

    /// Get the pesewas portion (0-99)
    pub const fn pesewas_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Apply a percentage expressed in basis points (100 bps = 1%)
    ///
    /// Rounds half-up to the pesewa (half away from zero for negatives),
    /// matching standard currency rounding.
    ///
    /// # Examples
    /// ```
    /// use ceditrack::models::Money;
    /// // 1% of GHS 100.00 = GHS 1.00
    /// assert_eq!(Money::from_cedis(100).percent_bps(100), Money::from_cedis(1));
    /// // 1.5% of GHS 0.33 rounds down to zero
    /// assert_eq!(Money::from_pesewas(33).percent_bps(150), Money::zero());
    /// ```
    pub const fn percent_bps(self, bps: i64) -> Self {
        let numerator = self.0 * bps;
        let rounded = if numerator >= 0 {
            (numerator + 5_000) / 10_000
        } else {
            -((-numerator + 5_000) / 10_000)
        };
        Self(rounded)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "GHS 10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency prefix if present
        let s = s
            .strip_prefix("GHS")
            .or_else(|| s.strip_prefix("GH₵"))
            .or_else(|| s.strip_prefix('₵'))
            .unwrap_or(s)
            .trim_start();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let pesewas = if let Some((cedis_str, pesewas_str)) = s.split_once('.') {
            let cedis: i64 = cedis_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fractional part to 2 digits
            let pesewas: i64 = match pesewas_str.len() {
                0 => 0,
                1 => {
                    pesewas_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => pesewas_str
                    .get(..2)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            cedis * 100 + pesewas
        } else {
            // Integer format - whole cedis
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -pesewas } else { pesewas }))
    }

    /// Format with an explicit currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{} {}.{:02}",
                symbol,
                self.cedis().abs(),
                self.pesewas_part()
            )
        } else {
            format!("{} {}.{:02}", symbol, self.cedis(), self.pesewas_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-GHS {}.{:02}", self.cedis().abs(), self.pesewas_part())
        } else {
            write!(f, "GHS {}.{:02}", self.cedis(), self.pesewas_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pesewas() {
        let m = Money::from_pesewas(1050);
        assert_eq!(m.pesewas(), 1050);
        assert_eq!(m.cedis(), 10);
        assert_eq!(m.pesewas_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pesewas(1050)), "GHS 10.50");
        assert_eq!(format!("{}", Money::from_pesewas(0)), "GHS 0.00");
        assert_eq!(format!("{}", Money::from_pesewas(-1050)), "-GHS 10.50");
        assert_eq!(format!("{}", Money::from_pesewas(5)), "GHS 0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pesewas(1000);
        let b = Money::from_pesewas(500);

        assert_eq!((a + b).pesewas(), 1500);
        assert_eq!((a - b).pesewas(), 500);
        assert_eq!((-a).pesewas(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().pesewas(), 1050);
        assert_eq!(Money::parse("GHS 10.50").unwrap().pesewas(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().pesewas(), -1050);
        assert_eq!(Money::parse("10").unwrap().pesewas(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().pesewas(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().pesewas(), 5);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_percent_bps_half_up() {
        // 1% of 1000.00 = 10.00
        assert_eq!(
            Money::from_cedis(1000).percent_bps(100),
            Money::from_cedis(10)
        );
        // 1.5% of 100.00 = 1.50
        assert_eq!(
            Money::from_cedis(100).percent_bps(150),
            Money::from_pesewas(150)
        );
        // 75% of 33.33 = 24.9975 -> 25.00 (half-up)
        assert_eq!(
            Money::from_pesewas(3333).percent_bps(7500),
            Money::from_pesewas(2500)
        );
        // 15% of 33.33 = 4.9995 -> 5.00
        assert_eq!(
            Money::from_pesewas(3333).percent_bps(1500),
            Money::from_pesewas(500)
        );
        // 10% of 33.33 = 3.333 -> 3.33
        assert_eq!(
            Money::from_pesewas(3333).percent_bps(1000),
            Money::from_pesewas(333)
        );
        // exact half rounds up: 1% of 0.50 = 0.005 -> 0.01
        assert_eq!(Money::from_pesewas(50).percent_bps(100), Money::from_pesewas(1));
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_pesewas(1000);
        let b = Money::from_pesewas(500);

        assert!(a > b);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_pesewas(100),
            Money::from_pesewas(200),
            Money::from_pesewas(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.pesewas(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_pesewas(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
