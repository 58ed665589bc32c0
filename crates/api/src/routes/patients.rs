//! Patient registry routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::info;
use vera_core::clinic::PatientInput;
use vera_db::PatientRepository;

use crate::{
    AppState, ApiError,
    extractors::{JsonBody, record_id},
};

/// Creates the patient routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/patients", get(list_patients).post(create_patient))
        .route(
            "/patients/{id}",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
}

fn repository(state: &AppState) -> PatientRepository {
    PatientRepository::new((*state.db).clone())
}

/// GET `/patients` - List patients, newest first.
async fn list_patients(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let patients = repository(&state).list().await?;
    Ok(Json(patients))
}

/// GET `/patients/{id}` - Fetch a patient.
async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let patient = repository(&state).get(record_id(&id)?).await?;
    Ok(Json(patient))
}

/// POST `/patients` - Register a patient.
async fn create_patient(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PatientInput>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.normalize()?;
    let patient = repository(&state).create(input).await?;

    info!(patient_id = %patient.id, "Patient registered");
    Ok((StatusCode::CREATED, Json(patient)))
}

/// PUT `/patients/{id}` - Replace a patient's details.
async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<PatientInput>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id)?;
    let input = payload.normalize()?;
    let patient = repository(&state).replace(id, input).await?;
    Ok(Json(patient))
}

/// DELETE `/patients/{id}` - Delete a patient and everything attached to them.
async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id)?;
    repository(&state).delete(id).await?;

    info!(patient_id = %id, "Patient deleted");
    Ok(Json(json!({ "message": "Patient deleted" })))
}
