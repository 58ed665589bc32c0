//! Billing aggregation.

use rust_decimal::Decimal;

use super::types::{BillingTotals, InvoiceStatus};

/// Sums invoice totals by payment status.
///
/// Accepts one `(status, totalFCFA)` pair per invoice, or pre-grouped partial
/// sums; both add up the same way. Groups with no entries report zero.
#[must_use]
pub fn aggregate_paid_unpaid_totals<I>(invoices: I) -> BillingTotals
where
    I: IntoIterator<Item = (InvoiceStatus, Decimal)>,
{
    invoices
        .into_iter()
        .fold(BillingTotals::default(), |mut totals, (status, total_fcfa)| {
            match status {
                InvoiceStatus::Paid => totals.paid_fcfa += total_fcfa,
                InvoiceStatus::Unpaid => totals.unpaid_fcfa += total_fcfa,
            }
            totals
        })
}
