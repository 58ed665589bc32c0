//! Notification routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
};
use serde_json::json;
use tracing::info;
use vera_core::clinic::NotificationInput;
use vera_db::NotificationRepository;

use crate::{
    AppState, ApiError,
    extractors::{JsonBody, record_id},
};

/// Creates the notification routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(list_notifications).post(create_notification),
        )
        .route("/notifications/{id}", delete(delete_notification))
        .route("/notifications/{id}/read", put(mark_read))
}

fn repository(state: &AppState) -> NotificationRepository {
    NotificationRepository::new((*state.db).clone())
}

/// GET `/notifications` - Most recent notifications first.
async fn list_notifications(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notifications = repository(&state).list_recent().await?;
    Ok(Json(notifications))
}

async fn create_notification(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NotificationInput>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.normalize()?;
    let notification = repository(&state).create(input).await?;

    info!(notification_id = %notification.id, kind = ?notification.kind, "Notification posted");
    Ok((StatusCode::CREATED, Json(notification)))
}

/// PUT `/notifications/{id}/read` - Mark a notification as read.
async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let notification = repository(&state).mark_read(record_id(&id)?).await?;
    Ok(Json(notification))
}

async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    repository(&state).delete(record_id(&id)?).await?;
    Ok(Json(json!({ "message": "Notification deleted" })))
}
