//! Decimal values that keep their wire form.
//!
//! FHIR decimals are precision-significant: `1.200` and `1.2` compare equal
//! but must be emitted exactly as they were received. `PreciseDecimal`
//! therefore carries both a `rust_decimal::Decimal` for arithmetic and the
//! original JSON token for emission.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

/// A decimal with its original string representation preserved.
///
/// Equality and ordering go through the numeric value only, so two
/// instances with different lexical forms of the same number compare equal.
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    value: Option<Decimal>,
    original_string: Arc<str>,
}

impl PreciseDecimal {
    /// Wraps a decimal, deriving the canonical token from the value.
    pub fn new(value: Decimal) -> Self {
        Self {
            original_string: Arc::from(value.to_string()),
            value: Some(value),
        }
    }

    /// Builds from an already-parsed value and its source token. The token
    /// is trusted to be a valid JSON number; `parse` is the checked entry.
    pub fn from_parts(value: Option<Decimal>, original: &str) -> Self {
        Self {
            value,
            original_string: Arc::from(original),
        }
    }

    /// Parses a decimal token. Exponent notation is accepted (`1.5e3`,
    /// `1.5E3`) and normalized through `Decimal::from_scientific`; plain
    /// forms go through `Decimal::from_str` so trailing zeros keep their
    /// scale. The token itself is stored untouched.
    pub fn parse(token: &str) -> Option<Self> {
        let value = if token.contains(['e', 'E']) {
            let normalized = token.replace('E', "e");
            Decimal::from_scientific(&normalized).ok()?
        } else {
            Decimal::from_str(token).ok()?
        };
        Some(Self {
            value: Some(value),
            original_string: Arc::from(token),
        })
    }

    /// The numeric value, when the token was in range for `rust_decimal`.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// The token exactly as it appeared on the wire.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }
}

impl Default for PreciseDecimal {
    fn default() -> Self {
        Self {
            value: Some(Decimal::ZERO),
            original_string: Arc::from("0"),
        }
    }
}

impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl FromStr for PreciseDecimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(rust_decimal::Error::ErrorString(format!(
            "invalid decimal token: {s}"
        )))
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trailing_zeros_survive() {
        let parsed = PreciseDecimal::parse("1.200").unwrap();
        assert_eq!(parsed.original_string(), "1.200");
        assert_eq!(parsed.value(), Some(dec!(1.200)));
    }

    #[test]
    fn lexically_different_but_equal_values() {
        let a = PreciseDecimal::parse("1.200").unwrap();
        let b = PreciseDecimal::parse("1.2").unwrap();
        assert_eq!(a, b);
        assert_ne!(a.original_string(), b.original_string());
    }

    #[test]
    fn scientific_notation_parses() {
        let parsed = PreciseDecimal::parse("1.5e3").unwrap();
        assert_eq!(parsed.value(), Some(dec!(1500)));
        assert_eq!(parsed.original_string(), "1.5e3");
        assert!(PreciseDecimal::parse("1.5E3").is_some());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(PreciseDecimal::parse("abc").is_none());
        assert!(PreciseDecimal::parse("1.2.3").is_none());
    }
}
