//! Price amounts using fixed-point decimal
//!
//! **NEVER use f64 for prices!** Amounts go on the wire as plain decimal
//! strings and are part of the signature, so the rendering must be exact.
//!
//! - Uses `Decimal` internally (28-29 significant digits)
//! - Scale is preserved: `45.20` renders as `45.20`
//! - No exponent notation, no digit grouping

use crate::FlexPayError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price or trial amount.
///
/// # Examples
///
/// ```rust
/// use flexpay_lib::Amount;
///
/// let amount: Amount = "45.20".parse().unwrap();
/// assert_eq!(amount.to_plain_string(), "45.20");
///
/// let zero: Amount = "00.00".parse().unwrap();
/// assert_eq!(zero.to_plain_string(), "0.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Create from a `Decimal`.
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Get the internal Decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Render as a plain decimal string, the form used on the wire.
    pub fn to_plain_string(&self) -> String {
        // Decimal's Display never uses exponent notation and keeps the scale
        self.value.to_string()
    }

    /// Check if amount is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::new(Decimal::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::new(Decimal::from(value))
    }
}

impl FromStr for Amount {
    type Err = FlexPayError;

    /// Parse a decimal string such as `"123.45"`.
    ///
    /// Exponent notation (`"1e3"`) is rejected, as is any input with more
    /// fractional digits than a [`Decimal`] can hold.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str_exact(s.trim())
            .map(Self::new)
            .map_err(|e| FlexPayError::wrong_value("amount", format!("{s:?}: {e}")))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scale_preserved() {
        assert_eq!(Amount::new(dec!(45.20)).to_plain_string(), "45.20");
        assert_eq!(Amount::new(dec!(0.01)).to_plain_string(), "0.01");
    }

    #[test]
    fn test_leading_zeros_dropped() {
        let amount: Amount = "00.00".parse().unwrap();
        assert_eq!(amount.to_plain_string(), "0.00");
        assert!(amount.is_zero());
    }

    #[test]
    fn test_integers() {
        assert_eq!(Amount::from(10i64).to_plain_string(), "10");
        assert_eq!(Amount::from(14u32).to_string(), "14");
    }

    #[test]
    fn test_large_values_have_no_exponent() {
        let amount: Amount = "100000000000000000000".parse().unwrap();
        assert_eq!(amount.to_plain_string(), "100000000000000000000");

        let tiny: Amount = "0.0000000001".parse().unwrap();
        assert_eq!(tiny.to_plain_string(), "0.0000000001");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("12,50".parse::<Amount>().is_err());
        assert!("1e3".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
    }

    #[test]
    fn test_rejects_excess_precision() {
        let err = "0.12345678901234567890123456789"
            .parse::<Amount>()
            .unwrap_err();
        assert!(matches!(err, FlexPayError::WrongParameterValue { .. }));
        assert_eq!(
            "0.1234567890123456789012345678"
                .parse::<Amount>()
                .unwrap()
                .to_string(),
            "0.1234567890123456789012345678"
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let amount: Amount = "45.20".parse().unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"45.20\"");
    }
}
