//! Appointment booking routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::info;
use vera_core::clinic::{AppointmentInput, AppointmentPatch};
use vera_db::AppointmentRepository;

use crate::{
    AppState, ApiError,
    extractors::{JsonBody, record_id},
};

/// Creates the appointment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(list_appointments).post(create_appointment))
        .route(
            "/appointments/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
}

fn repository(state: &AppState) -> AppointmentRepository {
    AppointmentRepository::new((*state.db).clone())
}

/// GET `/appointments` - List appointments, newest first.
async fn list_appointments(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let appointments = repository(&state).list().await?;
    Ok(Json(appointments))
}

/// GET `/appointments/{id}` - Fetch an appointment.
async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let appointment = repository(&state).get(record_id(&id)?).await?;
    Ok(Json(appointment))
}

/// POST `/appointments` - Book an appointment.
async fn create_appointment(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AppointmentInput>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.normalize()?;
    let appointment = repository(&state).create(input).await?;

    info!(
        appointment_id = %appointment.id,
        patient_id = %appointment.patient_id,
        doctor_id = %appointment.doctor_id,
        date = %appointment.date,
        "Appointment booked"
    );
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// PUT `/appointments/{id}` - Reschedule or change status.
async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<AppointmentPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id)?;
    let changes = payload.changes()?;
    let appointment = repository(&state).update(id, changes).await?;

    info!(appointment_id = %id, status = ?appointment.status, "Appointment updated");
    Ok(Json(appointment))
}

/// DELETE `/appointments/{id}` - Remove an appointment.
async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id)?;
    repository(&state).delete(id).await?;
    Ok(Json(json!({ "message": "Appointment deleted" })))
}
