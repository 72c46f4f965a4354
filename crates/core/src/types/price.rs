//! Decimal price type with lenient parsing of feed price text.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the restaurant's single display currency.
///
/// Backed by [`Decimal`] so totals are exact; never a binary float.
///
/// Menu feed prices arrive as unvalidated text (`"10"`, `"$12.99"`), so the
/// usual entry point is [`Price::parse_lenient`], which strips a leading
/// currency symbol and degrades to [`Price::ZERO`] on malformed input
/// instead of failing the surrounding computation.
///
/// ## Examples
///
/// ```
/// use little_lemon_core::Price;
///
/// assert_eq!(Price::parse_lenient("$10").to_string(), "$10.00");
/// assert_eq!(Price::parse_lenient("12.50").to_string(), "$12.50");
/// assert_eq!(Price::parse_lenient("market price"), Price::ZERO);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse feed price text, degrading to zero on malformed input.
    ///
    /// Leading non-numeric characters (currency symbols, whitespace) are
    /// stripped before parsing; anything that still fails to parse as a
    /// decimal becomes [`Price::ZERO`]. Upstream price data is free text
    /// and not correctable at this layer, so there is no error path.
    #[must_use]
    pub fn parse_lenient(text: &str) -> Self {
        let numeric = text
            .trim()
            .trim_start_matches(|c: char| !(c.is_ascii_digit() || c == '-' || c == '.'));
        numeric.parse::<Decimal>().map_or(Self::ZERO, Self)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(Price::parse_lenient("10"), Price::new(dec("10")));
        assert_eq!(Price::parse_lenient("12.50"), Price::new(dec("12.50")));
    }

    #[test]
    fn test_parse_strips_currency_symbol() {
        assert_eq!(Price::parse_lenient("$10"), Price::new(dec("10")));
        assert_eq!(Price::parse_lenient("€9.99"), Price::new(dec("9.99")));
        assert_eq!(Price::parse_lenient("  $7.25 "), Price::new(dec("7.25")));
    }

    #[test]
    fn test_parse_malformed_degrades_to_zero() {
        assert_eq!(Price::parse_lenient(""), Price::ZERO);
        assert_eq!(Price::parse_lenient("$"), Price::ZERO);
        assert_eq!(Price::parse_lenient("market price"), Price::ZERO);
        assert_eq!(Price::parse_lenient("10 USD"), Price::ZERO);
    }

    #[test]
    fn test_arithmetic() {
        let base = Price::parse_lenient("10");
        let extra = Price::parse_lenient("1.50");
        assert_eq!((base + extra) * 2, Price::new(dec("23.00")));
    }

    #[test]
    fn test_sum() {
        let total: Price = ["1.10", "2.20", "3.30"]
            .iter()
            .map(|s| Price::parse_lenient(s))
            .sum();
        assert_eq!(total, Price::new(dec("6.60")));
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let total: Price = core::iter::empty().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::parse_lenient("10").to_string(), "$10.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::parse_lenient("12.99");
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
