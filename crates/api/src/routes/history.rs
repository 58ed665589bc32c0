//! Patient history and medical record routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::info;
use vera_core::clinic::RecordInput;
use vera_db::HistoryRepository;

use crate::{
    AppState, ApiError,
    extractors::{JsonBody, record_id},
};

/// Creates the patient history routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/patients/{id}/history", get(patient_history))
        .route(
            "/patients/{id}/records",
            get(list_records).post(create_record),
        )
}

fn repository(state: &AppState) -> HistoryRepository {
    HistoryRepository::new((*state.db).clone())
}

/// GET `/patients/{id}/history` - The patient with their appointments,
/// invoices and medical records.
async fn patient_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let history = repository(&state).history(record_id(&id)?).await?;
    Ok(Json(history))
}

/// GET `/patients/{id}/records` - Medical records, newest first.
async fn list_records(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let records = repository(&state).records(record_id(&id)?).await?;
    Ok(Json(records))
}

/// POST `/patients/{id}/records` - Add a medical record.
async fn create_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<RecordInput>,
) -> Result<impl IntoResponse, ApiError> {
    let patient_id = record_id(&id)?;
    let input = payload.normalize()?;
    let record = repository(&state).add_record(patient_id, input).await?;

    info!(record_id = %record.id, patient_id = %patient_id, "Medical record added");
    Ok((StatusCode::CREATED, Json(record)))
}
