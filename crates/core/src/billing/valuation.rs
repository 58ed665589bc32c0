//! Invoice valuation engine.
//!
//! Turns the operator's raw monetary input into the full set of FCFA fields.
//! The same arithmetic runs on creation and on every update that touches a
//! driving field, so stored invoices can never disagree with their inputs.

use rust_decimal::Decimal;
use std::str::FromStr;
use vera_shared::Currency;

use super::error::ValuationError;
use super::types::InvoiceValuation;
use crate::currency::{convert_amount, round_money, round_rate};
use crate::input::NumericInput;

/// Raw monetary fields of an invoice, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceInput {
    /// Currency code; unknown or missing codes fall back to FCFA.
    pub currency: Option<String>,
    /// Amount in `currency` units.
    pub amount_original: Option<NumericInput>,
    /// Conversion factor to FCFA. Ignored for FCFA invoices.
    pub exchange_rate: Option<NumericInput>,
    /// Fractional VAT rate, 0 when absent.
    pub vat_rate: Option<NumericInput>,
}

/// Resolves a submitted currency code, falling back to FCFA.
///
/// The fallback is silent: an unsupported code is not an error.
#[must_use]
pub fn resolve_currency(code: Option<&str>) -> Currency {
    code.and_then(|c| Currency::from_str(c).ok())
        .unwrap_or(Currency::SETTLEMENT)
}

/// Validates and values a new invoice.
///
/// # Errors
///
/// Returns a [`ValuationError`] when the amount is not positive, when a
/// foreign-currency invoice lacks a positive exchange rate, or when the VAT
/// rate is negative.
pub fn compute_invoice_totals(input: &InvoiceInput) -> Result<InvoiceValuation, ValuationError> {
    let currency = resolve_currency(input.currency.as_deref());
    let amount_original = positive_amount(input.amount_original.as_ref())?;
    let exchange_rate = if currency.is_settlement() {
        Decimal::ONE
    } else {
        positive_rate(input.exchange_rate.as_ref())?
    };
    let vat_rate = vat_rate_or_zero(input.vat_rate.as_ref())?;

    valuate(currency, amount_original, exchange_rate, vat_rate)
}

/// Derives the FCFA fields from already-validated inputs.
///
/// Subtotal, VAT and total are derived from unrounded values; each output is
/// rounded once, as it is produced.
///
/// # Errors
///
/// Returns [`ValuationError::AmountOutOfRange`] if an intermediate product
/// overflows.
pub fn valuate(
    currency: Currency,
    amount_original: Decimal,
    exchange_rate: Decimal,
    vat_rate: Decimal,
) -> Result<InvoiceValuation, ValuationError> {
    let rate = if currency.is_settlement() {
        Decimal::ONE
    } else {
        exchange_rate
    };

    let amount_fcfa =
        convert_amount(amount_original, rate).ok_or(ValuationError::AmountOutOfRange)?;
    let vat_amount_fcfa = amount_fcfa
        .checked_mul(vat_rate)
        .ok_or(ValuationError::AmountOutOfRange)?;
    let total_fcfa = amount_fcfa
        .checked_add(vat_amount_fcfa)
        .ok_or(ValuationError::AmountOutOfRange)?;

    Ok(InvoiceValuation {
        currency,
        amount_original: round_money(amount_original),
        exchange_rate: round_rate(rate),
        amount_fcfa: round_money(amount_fcfa),
        vat_rate: round_rate(vat_rate),
        vat_amount_fcfa: round_money(vat_amount_fcfa),
        total_fcfa: round_money(total_fcfa),
    })
}

pub(crate) fn positive_amount(value: Option<&NumericInput>) -> Result<Decimal, ValuationError> {
    value
        .and_then(NumericInput::as_decimal)
        .filter(|amount| *amount > Decimal::ZERO)
        .ok_or(ValuationError::NonPositiveAmount)
}

pub(crate) fn positive_rate(value: Option<&NumericInput>) -> Result<Decimal, ValuationError> {
    value
        .and_then(NumericInput::as_decimal)
        .filter(|rate| *rate > Decimal::ZERO)
        .ok_or(ValuationError::NonPositiveRate)
}

pub(crate) fn vat_rate_or_zero(value: Option<&NumericInput>) -> Result<Decimal, ValuationError> {
    match value {
        None => Ok(Decimal::ZERO),
        Some(input) if input.is_blank() => Ok(Decimal::ZERO),
        Some(input) => input
            .as_decimal()
            .filter(|rate| *rate >= Decimal::ZERO)
            .ok_or(ValuationError::NegativeVatRate),
    }
}
