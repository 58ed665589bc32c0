//! Router tests driven through `oneshot` against SeaORM's mock connection.
//!
//! The mock fails any query it has no prepared result for, so the validation
//! tests also prove that rejected requests never reach the database.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;
use vera_api::{AppState, create_router};
use vera_db::entities::{
    invoices, patients,
    sea_orm_active_enums::{CurrencyCode, Gender, InvoiceStatus, PaymentMethod},
};
use vera_shared::config::CorsConfig;

fn app(db: DatabaseConnection) -> Router {
    create_router(AppState::new(db), &CorsConfig::default(), None)
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn patient() -> patients::Model {
    let now = chrono::Utc::now().into();
    patients::Model {
        id: Uuid::new_v4(),
        first_name: "Awa".to_string(),
        last_name: "Ndiaye".to_string(),
        phone: String::new(),
        address: String::new(),
        age: Some(34),
        gender: Gender::Female,
        created_at: now,
        updated_at: now,
    }
}

fn invoice_for(patient: &patients::Model) -> invoices::Model {
    let now = chrono::Utc::now().into();
    invoices::Model {
        id: Uuid::new_v4(),
        patient_id: patient.id,
        patient_name: patient.full_name(),
        services: "Consultation".to_string(),
        currency: CurrencyCode::Eur,
        amount_original: dec!(100.00),
        exchange_rate: dec!(655.957000),
        amount_fcfa: dec!(65595.70),
        vat_rate: dec!(0.192500),
        vat_amount_fcfa: dec!(12627.17),
        total_fcfa: dec!(78222.87),
        status: InvoiceStatus::Unpaid,
        payment_method: PaymentMethod::Cash,
        payment_ref: String::new(),
        invoice_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        payment_date: None,
        created_at: now,
        updated_at: now,
    }
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(empty_db()), "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[rstest]
#[case("GET", "/patients/not-an-id")]
#[case("DELETE", "/doctors/42")]
#[case("GET", "/invoices/abc")]
#[case("PUT", "/notifications/xyz/read")]
#[case("GET", "/patients/not-an-id/history")]
#[tokio::test]
async fn test_invalid_id_is_bad_request(#[case] method: &str, #[case] uri: &str) {
    let (status, body) = send(app(empty_db()), method, uri, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid id");
}

#[tokio::test]
async fn test_missing_patient_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<patients::Model>::new()])
        .into_connection();
    let uri = format!("/patients/{}", Uuid::new_v4());

    let (status, body) = send(app(db), "GET", &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Patient not found");
}

#[tokio::test]
async fn test_patient_requires_names() {
    let (status, body) = send(
        app(empty_db()),
        "POST",
        "/patients",
        Some(json!({"firstName": "Awa", "lastName": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "firstName and lastName are required");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/doctors")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app(empty_db()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invoice_requires_mandatory_fields() {
    let (status, body) = send(
        app(empty_db()),
        "POST",
        "/invoices",
        Some(json!({"patientId": Uuid::new_v4().to_string(), "amountOriginal": 100})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "patientId, amountOriginal and invoiceDate are required"
    );
}

#[tokio::test]
async fn test_invoice_rejected_before_database() {
    let (status, body) = send(
        app(empty_db()),
        "POST",
        "/invoices",
        Some(json!({
            "patientId": Uuid::new_v4().to_string(),
            "amountOriginal": -5,
            "invoiceDate": "2025-03-01"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "amountOriginal must be > 0");
}

#[tokio::test]
async fn test_invoice_created_with_numeric_totals() {
    let patient = patient();
    let stored = invoice_for(&patient);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![patient.clone()]])
        .append_query_results([vec![stored.clone()]])
        .into_connection();

    let (status, body) = send(
        app(db),
        "POST",
        "/invoices",
        Some(json!({
            "patientId": patient.id.to_string(),
            "services": "Consultation",
            "currency": "EUR",
            "amountOriginal": "100",
            "exchangeRate": 655.957,
            "vatRate": 0.1925,
            "invoiceDate": "2025-03-01"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["_id"], stored.id.to_string());
    assert_eq!(body["patientName"], "Awa Ndiaye");
    assert_eq!(body["currency"], "EUR");
    assert_eq!(body["status"], "UNPAID");
    assert!(body["totalFCFA"].is_number());
    assert_eq!(body["totalFCFA"], json!(78222.87));
    assert_eq!(body["vatRate"], json!(0.1925));
}

#[tokio::test]
async fn test_invoice_filter_rejects_unknown_currency() {
    let (status, _) = send(app(empty_db()), "GET", "/invoices?currency=GBP", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_appointment_requires_schedule() {
    let (status, body) = send(
        app(empty_db()),
        "POST",
        "/appointments",
        Some(json!({"patientId": Uuid::new_v4().to_string(), "doctorId": Uuid::new_v4().to_string()})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "patientId, doctorId, date, time are required");
}

#[tokio::test]
async fn test_history_of_missing_patient() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<patients::Model>::new()])
        .into_connection();
    let uri = format!("/patients/{}/history", Uuid::new_v4());

    let (status, body) = send(app(db), "GET", &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Patient not found");
}
