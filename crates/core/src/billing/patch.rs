//! Partial updates of an invoice's monetary fields.
//!
//! An update payload may touch any subset of the four driving fields. The set
//! of touched fields is tracked explicitly; when it is empty the stored
//! derivation is left alone, so edits to payment details never rewrite totals.

use rust_decimal::Decimal;
use std::str::FromStr;
use vera_shared::Currency;

use super::error::ValuationError;
use super::types::InvoiceValuation;
use super::valuation::{positive_amount, positive_rate, valuate, vat_rate_or_zero};
use crate::input::NumericInput;

/// A field whose change forces the FCFA amounts to be recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrivingField {
    /// `currency`
    Currency,
    /// `amountOriginal`
    AmountOriginal,
    /// `exchangeRate`
    ExchangeRate,
    /// `vatRate`
    VatRate,
}

/// Driving fields present in an update payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuationPatch {
    /// New currency code. Unrecognized codes keep the stored currency.
    pub currency: Option<String>,
    /// New original amount.
    pub amount_original: Option<NumericInput>,
    /// New exchange rate.
    pub exchange_rate: Option<NumericInput>,
    /// New VAT rate.
    pub vat_rate: Option<NumericInput>,
}

impl ValuationPatch {
    /// Returns the driving fields this patch touches.
    #[must_use]
    pub fn dirty_fields(&self) -> Vec<DrivingField> {
        let mut dirty = Vec::with_capacity(4);
        if self.currency.is_some() {
            dirty.push(DrivingField::Currency);
        }
        if self.amount_original.is_some() {
            dirty.push(DrivingField::AmountOriginal);
        }
        if self.exchange_rate.is_some() {
            dirty.push(DrivingField::ExchangeRate);
        }
        if self.vat_rate.is_some() {
            dirty.push(DrivingField::VatRate);
        }
        dirty
    }
}

/// Re-values a stored invoice after a partial update.
///
/// Returns `Ok(None)` when the patch touches no driving field. Otherwise the
/// patch is merged over the stored values and the whole derivation is redone.
///
/// # Errors
///
/// Returns a [`ValuationError`] if any supplied driving field is invalid, or if
/// the invoice moves from FCFA to a foreign currency without an exchange rate.
pub fn revalue(
    stored: &InvoiceValuation,
    patch: &ValuationPatch,
) -> Result<Option<InvoiceValuation>, ValuationError> {
    if patch.dirty_fields().is_empty() {
        return Ok(None);
    }

    let currency = patch
        .currency
        .as_deref()
        .and_then(|code| Currency::from_str(code).ok())
        .unwrap_or(stored.currency);

    let amount_original = match &patch.amount_original {
        Some(input) => positive_amount(Some(input))?,
        None => stored.amount_original,
    };

    let exchange_rate = if currency.is_settlement() {
        Decimal::ONE
    } else {
        match &patch.exchange_rate {
            Some(input) => positive_rate(Some(input))?,
            // A stored FCFA invoice carries the placeholder rate 1, which is not
            // a real quote for the new currency.
            None if stored.currency.is_settlement() => {
                return Err(ValuationError::NonPositiveRate);
            }
            None => stored.exchange_rate,
        }
    };

    let vat_rate = match &patch.vat_rate {
        Some(input) => vat_rate_or_zero(Some(input))?,
        None => stored.vat_rate,
    };

    valuate(currency, amount_original, exchange_rate, vat_rate).map(Some)
}
