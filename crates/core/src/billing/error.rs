//! Billing error types.

use thiserror::Error;

/// Rejections raised by the valuation engine.
///
/// All variants are deterministic input errors: they are reported to the
/// caller and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValuationError {
    /// Original amount missing, unparseable, zero or negative.
    #[error("amountOriginal must be > 0")]
    NonPositiveAmount,

    /// Exchange rate missing or not positive for a foreign currency.
    #[error("exchangeRate must be > 0")]
    NonPositiveRate,

    /// VAT rate unparseable or negative.
    #[error("vatRate must be >= 0")]
    NegativeVatRate,

    /// Derived amounts exceed the representable range.
    #[error("amountOriginal is too large")]
    AmountOutOfRange,
}

/// Errors raised while preparing an invoice for storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// One of the mandatory creation fields is absent.
    #[error("patientId, amountOriginal and invoiceDate are required")]
    MissingRequiredFields,

    /// The patient reference is not a valid id.
    #[error("Invalid patientId")]
    InvalidPatientId,

    /// A date field is not in `YYYY-MM-DD` form.
    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(&'static str),

    /// The monetary fields were rejected.
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}
