//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that totals and per-category
//! sums add up exactly. Provides arithmetic, parsing and formatting.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Largest magnitude, in cents, accepted when converting from a float
///
/// Ten trillion dollars. Leaves room for close to a thousand maximal amounts
/// before a total would leave `i64`; past that, addition saturates.
const MAX_CENTS_F64: f64 = 1.0e15;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount in whole currency units, for averages and ratios
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a decimal amount to cents, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and amounts too large to hold.
    pub fn from_f64(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > MAX_CENTS_F64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Parse a money amount from a plain decimal string
    ///
    /// Accepts anything that reads as a real number ("25.50", "12.5", "7",
    /// "1e2"). Currency symbols are not accepted. The sign is preserved; the
    /// caller decides whether non-positive amounts are acceptable.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let value: f64 = s
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        Self::from_f64(value).ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>8}", Money::from_cents(1050)), "  $10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_largest_amounts_add_without_overflow() {
        let largest = Money::parse("1e13").unwrap();
        assert_eq!(largest.cents(), 1_000_000_000_000_000);

        let total: Money = vec![largest, largest].into_iter().sum();
        assert_eq!(total.cents(), 2_000_000_000_000_000);
        assert_eq!(total.to_string(), "$20000000000000.00");
    }

    #[test]
    fn test_addition_saturates() {
        let near_max = Money::from_cents(i64::MAX - 1);
        assert_eq!((near_max + Money::from_cents(500)).cents(), i64::MAX);

        let mut total = near_max;
        total += near_max;
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("12.5").unwrap().cents(), 1250);
        assert_eq!(Money::parse("-5").unwrap().cents(), -500);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse(" 0.05 ").unwrap().cents(), 5);
        assert_eq!(Money::parse("1e2").unwrap().cents(), 10000);
    }

    #[test]
    fn test_parse_rounds_to_nearest_cent() {
        assert_eq!(Money::parse("0.004").unwrap().cents(), 0);
        assert_eq!(Money::parse("0.006").unwrap().cents(), 1);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("$10.50").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("NaN").is_err());
        assert!(Money::parse("inf").is_err());
    }

    #[test]
    fn test_parse_rejects_huge_amounts() {
        assert!(matches!(
            Money::parse("1e300"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("9e16"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(Money::parse("-9e16").is_err());
    }

    #[test]
    fn test_as_f64() {
        assert!((Money::from_cents(1250).as_f64() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }
}
