//! Doctor directory routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::info;
use vera_core::clinic::DoctorInput;
use vera_db::DoctorRepository;

use crate::{
    AppState, ApiError,
    extractors::{JsonBody, record_id},
};

/// Creates the doctor routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/doctors", get(list_doctors).post(create_doctor))
        .route(
            "/doctors/{id}",
            get(get_doctor).put(update_doctor).delete(delete_doctor),
        )
}

fn repository(state: &AppState) -> DoctorRepository {
    DoctorRepository::new((*state.db).clone())
}

async fn list_doctors(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let doctors = repository(&state).list().await?;
    Ok(Json(doctors))
}

async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let doctor = repository(&state).get(record_id(&id)?).await?;
    Ok(Json(doctor))
}

async fn create_doctor(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DoctorInput>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.normalize()?;
    let doctor = repository(&state).create(input).await?;

    info!(doctor_id = %doctor.id, "Doctor added");
    Ok((StatusCode::CREATED, Json(doctor)))
}

/// PUT `/doctors/{id}` - Only the supplied fields change.
async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<DoctorInput>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id)?;
    let changes = payload.changes()?;
    let doctor = repository(&state).update(id, changes).await?;
    Ok(Json(doctor))
}

async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id)?;
    repository(&state).delete(id).await?;

    info!(doctor_id = %id, "Doctor removed");
    Ok(Json(json!({ "message": "Doctor deleted" })))
}
