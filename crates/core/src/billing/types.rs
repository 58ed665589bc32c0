//! Billing data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vera_shared::Currency;

/// Payment status of an invoice. Set by the operator, never derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    /// The invoice has been settled.
    Paid,
    /// The invoice is still open.
    #[default]
    Unpaid,
}

impl InvoiceStatus {
    /// Reads the status sent by the dashboard: exactly `"PAID"` is paid, anything else is unpaid.
    #[must_use]
    pub fn from_input(value: Option<&str>) -> Self {
        match value {
            Some("PAID") => Self::Paid,
            _ => Self::Unpaid,
        }
    }

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Unpaid => "UNPAID",
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAID" => Ok(Self::Paid),
            "UNPAID" => Ok(Self::Unpaid),
            _ => Err(format!("Unknown invoice status: {s}")),
        }
    }
}

/// How an invoice was (or will be) paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    /// Cash at the desk.
    #[default]
    Cash,
    /// Mobile money.
    Momo,
    /// Bank card.
    Card,
}

impl PaymentMethod {
    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Momo => "MOMO",
            Self::Card => "CARD",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASH" => Ok(Self::Cash),
            "MOMO" => Ok(Self::Momo),
            "CARD" => Ok(Self::Card),
            _ => Err(format!("Unknown payment method: {s}")),
        }
    }
}

/// The validated and derived monetary fields of an invoice.
///
/// Produced only by the valuation engine; the three FCFA fields are never set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceValuation {
    /// Currency the operator entered the amount in.
    pub currency: Currency,
    /// Amount as entered, rounded to 2 decimals.
    #[serde(rename = "amountOriginal", with = "rust_decimal::serde::float")]
    pub amount_original: Decimal,
    /// Conversion factor to FCFA, rounded to 6 decimals. Exactly 1 for FCFA.
    #[serde(rename = "exchangeRate", with = "rust_decimal::serde::float")]
    pub exchange_rate: Decimal,
    /// Amount converted to FCFA, rounded to 2 decimals.
    #[serde(rename = "amountFCFA", with = "rust_decimal::serde::float")]
    pub amount_fcfa: Decimal,
    /// Fractional VAT rate, rounded to 6 decimals.
    #[serde(rename = "vatRate", with = "rust_decimal::serde::float")]
    pub vat_rate: Decimal,
    /// VAT in FCFA, rounded to 2 decimals.
    #[serde(rename = "vatAmountFCFA", with = "rust_decimal::serde::float")]
    pub vat_amount_fcfa: Decimal,
    /// Amount plus VAT in FCFA, rounded to 2 decimals.
    #[serde(rename = "totalFCFA", with = "rust_decimal::serde::float")]
    pub total_fcfa: Decimal,
}

/// Paid and unpaid invoice totals in FCFA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingTotals {
    /// Sum of `totalFCFA` over paid invoices.
    #[serde(rename = "paidFCFA", with = "rust_decimal::serde::float")]
    pub paid_fcfa: Decimal,
    /// Sum of `totalFCFA` over unpaid invoices.
    #[serde(rename = "unpaidFCFA", with = "rust_decimal::serde::float")]
    pub unpaid_fcfa: Decimal,
}
