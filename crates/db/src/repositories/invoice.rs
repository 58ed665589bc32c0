//! Invoice repository.
//!
//! Monetary fields are derived by `vera_core::billing` before anything is
//! written; this module only persists what the valuation engine produced.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;
use vera_core::billing::{
    BillingError, BillingTotals, InvoiceUpdate, InvoiceValuation, PreparedInvoice,
    aggregate_paid_unpaid_totals,
};
use vera_shared::Currency;

use crate::entities::{
    invoices, patients,
    sea_orm_active_enums::{CurrencyCode, InvoiceStatus},
};

/// Error types for invoice operations.
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    /// Invoice not found.
    #[error("Invoice not found: {0}")]
    NotFound(Uuid),

    /// Billed patient does not exist.
    #[error("Patient not found: {0}")]
    PatientNotFound(Uuid),

    /// The request was rejected by the billing rules.
    #[error(transparent)]
    Billing(#[from] BillingError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Filter options for listing invoices.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    /// Case-insensitive text matched against the patient name and services.
    pub search: Option<String>,
    /// Filter by payment status.
    pub status: Option<vera_core::billing::InvoiceStatus>,
    /// Filter by currency.
    pub currency: Option<Currency>,
    /// Earliest invoice date (inclusive).
    pub from: Option<NaiveDate>,
    /// Latest invoice date (inclusive).
    pub to: Option<NaiveDate>,
}

/// Invoice repository.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: DatabaseConnection,
}

impl InvoiceRepository {
    /// Creates a new invoice repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists invoices matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, filter: InvoiceFilter) -> Result<Vec<invoices::Model>, InvoiceError> {
        let mut query = invoices::Entity::find().order_by_desc(invoices::Column::CreatedAt);

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", escape_like(search));
            query = query.filter(
                Condition::any()
                    .add(Expr::col(invoices::Column::PatientName).ilike(pattern.clone()))
                    .add(Expr::col(invoices::Column::Services).ilike(pattern)),
            );
        }
        if let Some(status) = filter.status {
            query = query.filter(invoices::Column::Status.eq(InvoiceStatus::from(status)));
        }
        if let Some(currency) = filter.currency {
            query = query.filter(invoices::Column::Currency.eq(CurrencyCode::from(currency)));
        }
        if let Some(from) = filter.from {
            query = query.filter(invoices::Column::InvoiceDate.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(invoices::Column::InvoiceDate.lte(to));
        }

        let rows = query.all(&self.db).await?;
        Ok(rows)
    }

    /// Fetches an invoice.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::NotFound`] if no invoice has this id.
    pub async fn get(&self, id: Uuid) -> Result<invoices::Model, InvoiceError> {
        invoices::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(InvoiceError::NotFound(id))
    }

    /// Stores a validated invoice.
    ///
    /// When no patient name was supplied, it is rebuilt from the patient record.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::PatientNotFound`] if the billed patient does not exist.
    pub async fn create(&self, input: PreparedInvoice) -> Result<invoices::Model, InvoiceError> {
        let patient = patients::Entity::find_by_id(input.patient_id)
            .one(&self.db)
            .await?
            .ok_or(InvoiceError::PatientNotFound(input.patient_id))?;

        let patient_name = input.patient_name.unwrap_or_else(|| patient.full_name());
        let v = input.valuation;
        let now = chrono::Utc::now().into();

        let invoice = invoices::ActiveModel {
            id: Set(Uuid::new_v4()),
            patient_id: Set(patient.id),
            patient_name: Set(patient_name),
            services: Set(input.services),
            currency: Set(v.currency.into()),
            amount_original: Set(v.amount_original),
            exchange_rate: Set(v.exchange_rate),
            amount_fcfa: Set(v.amount_fcfa),
            vat_rate: Set(v.vat_rate),
            vat_amount_fcfa: Set(v.vat_amount_fcfa),
            total_fcfa: Set(v.total_fcfa),
            status: Set(input.status.into()),
            payment_method: Set(input.payment_method.into()),
            payment_ref: Set(input.payment_ref),
            invoice_date: Set(input.invoice_date),
            payment_date: Set(input.payment_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = invoice.insert(&self.db).await?;
        tracing::info!(
            invoice_id = %result.id,
            patient_id = %result.patient_id,
            total_fcfa = %result.total_fcfa,
            "Invoice created"
        );
        Ok(result)
    }

    /// Applies a partial update.
    ///
    /// Monetary fields are re-derived from the stored values merged with the
    /// request, and only when the request touches currency, amount, rate or VAT.
    /// Nothing is written when the request is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The invoice does not exist
    /// - A field is rejected by the billing rules
    pub async fn update(
        &self,
        id: Uuid,
        update: &InvoiceUpdate,
    ) -> Result<invoices::Model, InvoiceError> {
        let invoice = self.get(id).await?;
        let changes = update.prepare(&invoice.valuation())?;

        if changes.is_empty() {
            return Ok(invoice);
        }

        let mut active: invoices::ActiveModel = invoice.into();
        if let Some(services) = changes.services {
            active.services = Set(services);
        }
        if let Some(invoice_date) = changes.invoice_date {
            active.invoice_date = Set(invoice_date);
        }
        if let Some(status) = changes.status {
            active.status = Set(status.into());
        }
        if let Some(payment_method) = changes.payment_method {
            active.payment_method = Set(payment_method.into());
        }
        if let Some(payment_ref) = changes.payment_ref {
            active.payment_ref = Set(payment_ref);
        }
        if let Some(payment_date) = changes.payment_date {
            active.payment_date = Set(payment_date);
        }
        if let Some(valuation) = changes.valuation {
            apply_valuation(&mut active, valuation);
            tracing::debug!(
                invoice_id = %id,
                dirty = ?update.valuation_patch().dirty_fields(),
                total_fcfa = %valuation.total_fcfa,
                "Invoice revalued"
            );
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes an invoice.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::NotFound`] if no invoice has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
        let result = invoices::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(InvoiceError::NotFound(id));
        }
        Ok(())
    }

    /// Sums invoice totals by payment status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn stats(&self) -> Result<BillingTotals, InvoiceError> {
        let groups: Vec<(InvoiceStatus, Option<Decimal>)> = invoices::Entity::find()
            .select_only()
            .column(invoices::Column::Status)
            .column_as(Expr::col(invoices::Column::TotalFcfa).sum(), "total_fcfa")
            .group_by(invoices::Column::Status)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(aggregate_paid_unpaid_totals(groups.into_iter().map(
            |(status, total)| (status.into(), total.unwrap_or(Decimal::ZERO)),
        )))
    }
}

fn apply_valuation(active: &mut invoices::ActiveModel, v: InvoiceValuation) {
    active.currency = Set(v.currency.into());
    active.amount_original = Set(v.amount_original);
    active.exchange_rate = Set(v.exchange_rate);
    active.amount_fcfa = Set(v.amount_fcfa);
    active.vat_rate = Set(v.vat_rate);
    active.vat_amount_fcfa = Set(v.vat_amount_fcfa);
    active.total_fcfa = Set(v.total_fcfa);
}

/// Escapes `LIKE` wildcards so search text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "invoice_tests.rs"]
mod tests;
