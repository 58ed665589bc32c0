//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod appointments;
pub mod doctors;
pub mod health;
pub mod history;
pub mod invoices;
pub mod notifications;
pub mod patients;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(patients::routes())
        .merge(history::routes())
        .merge(doctors::routes())
        .merge(appointments::routes())
        .merge(invoices::routes())
        .merge(notifications::routes())
}
