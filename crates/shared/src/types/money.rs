//! Currency codes accepted on invoices.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts travel as `rust_decimal::Decimal`; this module only names the units.

use serde::{Deserialize, Serialize};

/// Currencies an invoice can be entered in.
///
/// FCFA is the settlement currency: every invoice total is normalized into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Central African CFA franc (settlement currency).
    #[default]
    #[serde(rename = "FCFA")]
    Fcfa,
    /// Euro
    #[serde(rename = "EUR")]
    Eur,
    /// US Dollar
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// The currency all invoice totals are normalized into.
    pub const SETTLEMENT: Self = Self::Fcfa;

    /// Returns the ISO-style code used on the wire.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fcfa => "FCFA",
            Self::Eur => "EUR",
            Self::Usd => "USD",
        }
    }

    /// Returns true for the settlement currency.
    #[must_use]
    pub const fn is_settlement(self) -> bool {
        matches!(self, Self::Fcfa)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FCFA" | "XAF" => Ok(Self::Fcfa),
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Fcfa.to_string(), "FCFA");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Usd.to_string(), "USD");
    }

    #[rstest]
    #[case("FCFA", Currency::Fcfa)]
    #[case("fcfa", Currency::Fcfa)]
    #[case("XAF", Currency::Fcfa)]
    #[case("EUR", Currency::Eur)]
    #[case(" usd ", Currency::Usd)]
    fn test_currency_from_str(#[case] input: &str, #[case] expected: Currency) {
        assert_eq!(Currency::from_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("GBP")]
    #[case("")]
    #[case("F CFA")]
    fn test_currency_from_str_rejects_unknown(#[case] input: &str) {
        assert!(Currency::from_str(input).is_err());
    }

    #[test]
    fn test_default_is_settlement() {
        assert_eq!(Currency::default(), Currency::SETTLEMENT);
        assert!(Currency::Fcfa.is_settlement());
        assert!(!Currency::Usd.is_settlement());
    }

    #[test]
    fn test_currency_serde_codes() {
        assert_eq!(serde_json::to_string(&Currency::Fcfa).unwrap(), "\"FCFA\"");
        let eur: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(eur, Currency::Eur);
    }
}
