//! Invoice valuation and billing aggregation.

pub mod aggregation;
pub mod draft;
pub mod error;
pub mod patch;
pub mod types;
pub mod valuation;

#[cfg(test)]
mod props;

pub use aggregation::aggregate_paid_unpaid_totals;
pub use draft::{InvoiceChanges, InvoiceDraft, InvoiceUpdate, PreparedInvoice};
pub use error::{BillingError, ValuationError};
pub use patch::{DrivingField, ValuationPatch, revalue};
pub use types::{BillingTotals, InvoiceStatus, InvoiceValuation, PaymentMethod};
pub use valuation::{InvoiceInput, compute_invoice_totals, resolve_currency, valuate};
