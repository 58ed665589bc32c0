//! Invoice routes.
//!
//! Monetary fields are valued by [`vera_core::billing`] before anything is
//! written, so a rejected request never touches the database.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use vera_core::billing::{InvoiceDraft, InvoiceStatus, InvoiceUpdate};
use vera_core::input::{non_blank, parse_date};
use vera_db::{InvoiceRepository, repositories::InvoiceFilter};
use vera_shared::Currency;

use crate::{
    AppState, ApiError,
    extractors::{JsonBody, QueryParams, record_id},
};

/// Creates the invoice routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/stats", get(invoice_stats))
        .route(
            "/invoices/{id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

fn repository(state: &AppState) -> InvoiceRepository {
    InvoiceRepository::new((*state.db).clone())
}

/// Query parameters for listing invoices.
#[derive(Debug, Default, Deserialize)]
pub struct InvoiceQuery {
    /// Matches patient name or services.
    pub q: Option<String>,
    /// `PAID` or `UNPAID`.
    pub status: Option<String>,
    /// Currency code.
    pub currency: Option<String>,
    /// Earliest invoice date (inclusive).
    pub from: Option<String>,
    /// Latest invoice date (inclusive).
    pub to: Option<String>,
}

impl InvoiceQuery {
    fn into_filter(self) -> Result<InvoiceFilter, ApiError> {
        let status = non_blank(self.status.as_deref())
            .map(|s| InvoiceStatus::from_str(&s.to_uppercase()))
            .transpose()
            .map_err(ApiError::bad_request)?;
        let currency = non_blank(self.currency.as_deref())
            .map(Currency::from_str)
            .transpose()
            .map_err(ApiError::bad_request)?;

        Ok(InvoiceFilter {
            search: non_blank(self.q.as_deref()).map(str::to_string),
            status,
            currency,
            from: query_date(self.from.as_deref(), "from")?,
            to: query_date(self.to.as_deref(), "to")?,
        })
    }
}

fn query_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, ApiError> {
    non_blank(value)
        .map(|text| {
            parse_date(text).ok_or_else(|| {
                ApiError::bad_request(format!("{field} must be a date in YYYY-MM-DD format"))
            })
        })
        .transpose()
}

/// GET `/invoices` - List invoices, newest first, optionally filtered.
async fn list_invoices(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<InvoiceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = query.into_filter()?;
    let invoices = repository(&state).list(filter).await?;
    Ok(Json(invoices))
}

/// GET `/invoices/stats` - FCFA totals of paid and unpaid invoices.
async fn invoice_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let totals = repository(&state).stats().await?;
    Ok(Json(totals))
}

/// GET `/invoices/{id}` - Fetch an invoice.
async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice = repository(&state).get(record_id(&id)?).await?;
    Ok(Json(invoice))
}

/// POST `/invoices` - Issue an invoice.
async fn create_invoice(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<InvoiceDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let prepared = draft.prepare()?;
    let invoice = repository(&state).create(prepared).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// PUT `/invoices/{id}` - Update an invoice, revaluing it when a monetary field changes.
async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<InvoiceUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id)?;
    let invoice = repository(&state).update(id, &update).await?;

    info!(invoice_id = %id, status = ?invoice.status, "Invoice updated");
    Ok(Json(invoice))
}

/// DELETE `/invoices/{id}` - Delete an invoice.
async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id)?;
    repository(&state).delete(id).await?;

    info!(invoice_id = %id, "Invoice deleted");
    Ok(Json(json!({ "message": "Invoice deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn query(status: Option<&str>, currency: Option<&str>, from: Option<&str>) -> InvoiceQuery {
        InvoiceQuery {
            status: status.map(str::to_string),
            currency: currency.map(str::to_string),
            from: from.map(str::to_string),
            ..InvoiceQuery::default()
        }
    }

    #[test]
    fn test_empty_query_has_no_filters() {
        let filter = InvoiceQuery::default().into_filter().unwrap();
        assert!(filter.search.is_none());
        assert!(filter.status.is_none());
        assert!(filter.currency.is_none());
    }

    #[test]
    fn test_query_parses_filters() {
        let filter = query(Some("paid"), Some("eur"), Some("2025-01-01"))
            .into_filter()
            .unwrap();
        assert_eq!(filter.status, Some(InvoiceStatus::Paid));
        assert_eq!(filter.currency, Some(Currency::Eur));
        assert_eq!(filter.from, NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[rstest]
    #[case(Some("LATE"), None, None)]
    #[case(None, Some("GBP"), None)]
    #[case(None, None, Some("01/01/2025"))]
    fn test_query_rejects_unknown_values(
        #[case] status: Option<&str>,
        #[case] currency: Option<&str>,
        #[case] from: Option<&str>,
    ) {
        let err = query(status, currency, from).into_filter().unwrap_err();
        assert_eq!(err.0.status_code(), 400);
    }
}
