//! Repository tests for invoices against SeaORM's mock connection.
//!
//! The mock fails any query it has no prepared result for, so a test that
//! prepares a single result also proves nothing else was sent.

use std::collections::BTreeMap;

use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};
use vera_core::billing::{InvoiceDraft, ValuationError};
use vera_core::input::NumericInput;

use super::*;
use crate::entities::sea_orm_active_enums::PaymentMethod;

fn stored_invoice() -> invoices::Model {
    let now = chrono::Utc::now().into();
    invoices::Model {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        patient_name: "Awa Ndiaye".to_string(),
        services: "Consultation".to_string(),
        currency: CurrencyCode::Usd,
        amount_original: dec!(100.00),
        exchange_rate: dec!(600.000000),
        amount_fcfa: dec!(60000.00),
        vat_rate: dec!(0.192500),
        vat_amount_fcfa: dec!(11550.00),
        total_fcfa: dec!(71550.00),
        status: InvoiceStatus::Unpaid,
        payment_method: PaymentMethod::Cash,
        payment_ref: String::new(),
        invoice_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        payment_date: None,
        created_at: now,
        updated_at: now,
    }
}

fn mock_with(results: Vec<Vec<invoices::Model>>) -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(results)
        .into_connection()
}

#[test]
fn test_escape_like() {
    assert_eq!(escape_like("consult"), "consult");
    assert_eq!(escape_like("50%_off"), "50\\%\\_off");
    assert_eq!(escape_like("a\\b"), "a\\\\b");
}

#[test]
fn test_stored_valuation_roundtrip() {
    let invoice = stored_invoice();
    let valuation = invoice.valuation();
    assert_eq!(valuation.currency, Currency::Usd);
    assert_eq!(valuation.total_fcfa, dec!(71550.00));
}

#[tokio::test]
async fn test_get_missing_invoice() {
    let repo = InvoiceRepository::new(mock_with(vec![vec![]]));
    let id = Uuid::new_v4();

    let result = repo.get(id).await;
    assert!(matches!(result, Err(InvoiceError::NotFound(missing)) if missing == id));
}

#[tokio::test]
async fn test_update_without_changes_writes_nothing() {
    let stored = stored_invoice();
    let repo = InvoiceRepository::new(mock_with(vec![vec![stored.clone()]]));

    let result = repo.update(stored.id, &InvoiceUpdate::default()).await.unwrap();
    assert_eq!(result, stored);
}

#[tokio::test]
async fn test_rejected_update_writes_nothing() {
    let stored = stored_invoice();
    let repo = InvoiceRepository::new(mock_with(vec![vec![stored.clone()]]));

    let update = InvoiceUpdate {
        amount_original: Some(NumericInput::Decimal(dec!(-5))),
        payment_ref: Some("RCPT-1".to_string()),
        ..InvoiceUpdate::default()
    };

    let result = repo.update(stored.id, &update).await;
    assert!(matches!(
        result,
        Err(InvoiceError::Billing(BillingError::Valuation(
            ValuationError::NonPositiveAmount
        )))
    ));
}

#[tokio::test]
async fn test_create_for_unknown_patient() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<patients::Model>::new()])
        .into_connection();
    let repo = InvoiceRepository::new(db);

    let draft: InvoiceDraft = serde_json::from_value(serde_json::json!({
        "patientId": Uuid::new_v4().to_string(),
        "amountOriginal": 5000,
        "invoiceDate": "2025-03-01"
    }))
    .unwrap();
    let prepared = draft.prepare().unwrap();
    let patient_id = prepared.patient_id;

    let result = repo.create(prepared).await;
    assert!(matches!(result, Err(InvoiceError::PatientNotFound(id)) if id == patient_id));
}

#[tokio::test]
async fn test_stats_from_grouped_sums() {
    let row = |status: &str, total: Decimal| {
        BTreeMap::from([
            ("status".to_string(), Value::from(status.to_string())),
            ("total_fcfa".to_string(), Value::from(total)),
        ])
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row("PAID", dec!(300.00)), row("UNPAID", dec!(50.00))]])
        .into_connection();
    let repo = InvoiceRepository::new(db);

    let totals = repo.stats().await.unwrap();
    assert_eq!(totals.paid_fcfa, dec!(300.00));
    assert_eq!(totals.unpaid_fcfa, dec!(50.00));
}

#[tokio::test]
async fn test_stats_without_invoices() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<String, Value>>::new()])
        .into_connection();
    let repo = InvoiceRepository::new(db);

    let totals = repo.stats().await.unwrap();
    assert_eq!(totals, BillingTotals::default());
}
