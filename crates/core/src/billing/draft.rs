//! Invoice create and update requests.
//!
//! Everything here runs before the database is touched: a request that fails
//! validation leaves no partial write behind.

use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

use super::error::BillingError;
use super::patch::{ValuationPatch, revalue};
use super::types::{InvoiceStatus, InvoiceValuation, PaymentMethod};
use super::valuation::{InvoiceInput, compute_invoice_totals};
use crate::input::{NumericInput, lenient_string, non_blank, parse_date, parse_id};

/// Body of an invoice creation request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    /// Patient the invoice is billed to.
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_id: Option<String>,
    /// Display name override; rebuilt from the patient when blank.
    pub patient_name: Option<String>,
    /// Free-text description of the services billed.
    pub services: Option<String>,
    /// Currency code.
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    /// Amount in `currency` units.
    pub amount_original: Option<NumericInput>,
    /// Conversion factor to FCFA.
    pub exchange_rate: Option<NumericInput>,
    /// Fractional VAT rate.
    pub vat_rate: Option<NumericInput>,
    /// `"PAID"` or anything else for unpaid.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Invoice date, `YYYY-MM-DD`.
    pub invoice_date: Option<String>,
    /// `CASH`, `MOMO` or `CARD`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub payment_method: Option<String>,
    /// Payment reference (receipt or transaction number).
    pub payment_ref: Option<String>,
    /// Payment date, `YYYY-MM-DD`, blank when not yet paid.
    pub payment_date: Option<String>,
}

/// A validated invoice ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedInvoice {
    /// Patient the invoice is billed to.
    pub patient_id: Uuid,
    /// Caller-supplied display name, if any.
    pub patient_name: Option<String>,
    /// Services billed.
    pub services: String,
    /// Monetary fields.
    pub valuation: InvoiceValuation,
    /// Payment status.
    pub status: InvoiceStatus,
    /// Invoice date.
    pub invoice_date: NaiveDate,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Payment reference.
    pub payment_ref: String,
    /// Payment date.
    pub payment_date: Option<NaiveDate>,
}

impl InvoiceDraft {
    /// Returns the monetary part of the request.
    #[must_use]
    pub fn valuation_input(&self) -> InvoiceInput {
        InvoiceInput {
            currency: self.currency.clone(),
            amount_original: self.amount_original.clone(),
            exchange_rate: self.exchange_rate.clone(),
            vat_rate: self.vat_rate.clone(),
        }
    }

    /// Validates the request and values the invoice.
    ///
    /// # Errors
    ///
    /// Returns a [`BillingError`] if a mandatory field is missing, an id or
    /// date is malformed, or the monetary fields are rejected.
    pub fn prepare(&self) -> Result<PreparedInvoice, BillingError> {
        let (Some(patient_id), Some(_), Some(invoice_date)) = (
            non_blank(self.patient_id.as_deref()),
            self.amount_original.as_ref(),
            non_blank(self.invoice_date.as_deref()),
        ) else {
            return Err(BillingError::MissingRequiredFields);
        };

        let patient_id = parse_id(patient_id).ok_or(BillingError::InvalidPatientId)?;
        let invoice_date =
            parse_date(invoice_date).ok_or(BillingError::InvalidDate("invoiceDate"))?;
        let valuation = compute_invoice_totals(&self.valuation_input())?;
        let payment_date = optional_date(self.payment_date.as_deref(), "paymentDate")?;

        Ok(PreparedInvoice {
            patient_id,
            patient_name: non_blank(self.patient_name.as_deref()).map(str::to_string),
            services: self.services.clone().unwrap_or_default(),
            valuation,
            status: InvoiceStatus::from_input(self.status.as_deref()),
            invoice_date,
            payment_method: self
                .payment_method
                .as_deref()
                .and_then(|m| PaymentMethod::from_str(m).ok())
                .unwrap_or_default(),
            payment_ref: self.payment_ref.clone().unwrap_or_default(),
            payment_date,
        })
    }
}

/// Body of an invoice update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceUpdate {
    /// Services billed.
    pub services: Option<String>,
    /// Invoice date.
    pub invoice_date: Option<String>,
    /// `"PAID"` or anything else for unpaid.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Payment method; unrecognized values keep the stored method.
    #[serde(default, deserialize_with = "lenient_string")]
    pub payment_method: Option<String>,
    /// Payment reference.
    pub payment_ref: Option<String>,
    /// Payment date; blank clears it.
    pub payment_date: Option<String>,
    /// Currency code.
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    /// Amount in `currency` units.
    pub amount_original: Option<NumericInput>,
    /// Conversion factor to FCFA.
    pub exchange_rate: Option<NumericInput>,
    /// Fractional VAT rate.
    pub vat_rate: Option<NumericInput>,
}

/// Field changes to apply to a stored invoice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceChanges {
    /// New services text.
    pub services: Option<String>,
    /// New invoice date.
    pub invoice_date: Option<NaiveDate>,
    /// New status.
    pub status: Option<InvoiceStatus>,
    /// New payment method.
    pub payment_method: Option<PaymentMethod>,
    /// New payment reference.
    pub payment_ref: Option<String>,
    /// New payment date; `Some(None)` clears it.
    pub payment_date: Option<Option<NaiveDate>>,
    /// Re-derived monetary fields, present only when a driving field changed.
    pub valuation: Option<InvoiceValuation>,
}

impl InvoiceChanges {
    /// Returns true when applying these changes would not modify anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl InvoiceUpdate {
    /// Returns the driving fields of the request.
    #[must_use]
    pub fn valuation_patch(&self) -> ValuationPatch {
        ValuationPatch {
            currency: self.currency.clone(),
            amount_original: self.amount_original.clone(),
            exchange_rate: self.exchange_rate.clone(),
            vat_rate: self.vat_rate.clone(),
        }
    }

    /// Validates the request against the stored monetary fields.
    ///
    /// # Errors
    ///
    /// Returns a [`BillingError`] if a date is malformed or a driving field is
    /// rejected by the valuation engine.
    pub fn prepare(&self, stored: &InvoiceValuation) -> Result<InvoiceChanges, BillingError> {
        let invoice_date = self
            .invoice_date
            .as_deref()
            .map(|d| parse_date(d).ok_or(BillingError::InvalidDate("invoiceDate")))
            .transpose()?;

        let payment_date = self
            .payment_date
            .as_deref()
            .map(|d| optional_date(Some(d), "paymentDate"))
            .transpose()?;

        let valuation = revalue(stored, &self.valuation_patch())?;

        Ok(InvoiceChanges {
            services: self.services.clone(),
            invoice_date,
            status: self
                .status
                .as_deref()
                .map(|s| InvoiceStatus::from_input(Some(s))),
            payment_method: self
                .payment_method
                .as_deref()
                .and_then(|m| PaymentMethod::from_str(m).ok()),
            payment_ref: self.payment_ref.clone(),
            payment_date,
            valuation,
        })
    }
}

fn optional_date(value: Option<&str>, field: &'static str) -> Result<Option<NaiveDate>, BillingError> {
    non_blank(value)
        .map(|d| parse_date(d).ok_or(BillingError::InvalidDate(field)))
        .transpose()
}
