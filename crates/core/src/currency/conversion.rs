//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for invoice valuation:
//! - Monetary amounts are kept to 2 decimal places
//! - Exchange and VAT rates are kept to 6 decimal places
//! - Midpoints round away from zero (0.005 -> 0.01), matching what operators
//!   compute by hand on the billing desk
//! - Rounding happens once, on the derived value, never on the inputs

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Decimal places kept for monetary amounts.
pub const MONEY_DECIMALS: u32 = 2;

/// Decimal places kept for exchange and VAT rates.
pub const RATE_DECIMALS: u32 = 6;

/// Rounds a monetary amount to [`MONEY_DECIMALS`].
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a rate to [`RATE_DECIMALS`].
#[must_use]
pub fn round_rate(rate: Decimal) -> Decimal {
    rate.round_dp_with_strategy(RATE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts an amount into FCFA at the given exchange rate.
///
/// The product is left unrounded. Returns `None` when it does not fit in a
/// `Decimal`.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    amount.checked_mul(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_amount() {
        // 100 USD * 600 = 60,000 FCFA
        let result = convert_amount(dec!(100), dec!(600));
        assert_eq!(result, Some(dec!(60000)));
    }

    #[test]
    fn test_convert_with_rounding() {
        // 12.34 EUR * 655.957 = 8094.50938 FCFA -> 8094.51
        let result = convert_amount(dec!(12.34), dec!(655.957));
        assert_eq!(result, Some(dec!(8094.50938)));
        assert_eq!(result.map(round_money), Some(dec!(8094.51)));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_money(dec!(0.005)), dec!(0.01));
        assert_eq!(round_money(dec!(2.125)), dec!(2.13));
        assert_eq!(round_money(dec!(2.135)), dec!(2.14));
        assert_eq!(round_money(dec!(-2.125)), dec!(-2.13));
    }

    #[test]
    fn test_round_rate_keeps_six_places() {
        assert_eq!(round_rate(dec!(655.9571234)), dec!(655.957123));
        assert_eq!(round_rate(dec!(0.1925005)), dec!(0.192501));
        assert_eq!(round_rate(dec!(0.1925)), dec!(0.1925));
    }

    #[test]
    fn test_convert_overflow_is_none() {
        assert_eq!(convert_amount(Decimal::MAX, dec!(2)), None);
    }
}
