//! Error to HTTP response mapping.
//!
//! Every failure leaves the API as `{"error": <code>, "message": <text>}` with
//! the status code of the underlying [`AppError`].

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;
use vera_core::billing::BillingError;
use vera_core::clinic::ClinicError;
use vera_db::repositories::{
    AppointmentError, DoctorError, InvoiceError, NotificationError, PatientError, RecordError,
};
use vera_shared::AppError;

/// An [`AppError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Shorthand for a 404 with the given message.
    #[must_use]
    pub fn not_found(message: &str) -> Self {
        Self(AppError::NotFound(message.to_string()))
    }

    /// Shorthand for a 400 with the given message.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(AppError::BadRequest(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_server_error() {
            error!(error = %err, "Request failed");
        }

        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(json!({
                "error": err.error_code(),
                "message": err.public_message()
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<ClinicError> for ApiError {
    fn from(err: ClinicError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

fn database(err: &sea_orm::DbErr) -> ApiError {
    ApiError(AppError::Database(err.to_string()))
}

impl From<PatientError> for ApiError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound(_) => Self::not_found("Patient not found"),
            PatientError::Database(e) => database(&e),
        }
    }
}

impl From<DoctorError> for ApiError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => Self::not_found("Doctor not found"),
            DoctorError::Database(e) => database(&e),
        }
    }
}

impl From<AppointmentError> for ApiError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(_) => Self::not_found("Appointment not found"),
            AppointmentError::PatientNotFound(_) => Self::not_found("Patient not found"),
            AppointmentError::DoctorNotFound(_) => Self::not_found("Doctor not found"),
            AppointmentError::Database(e) => database(&e),
        }
    }
}

impl From<InvoiceError> for ApiError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::NotFound(_) => Self::not_found("Invoice not found"),
            InvoiceError::PatientNotFound(_) => Self::not_found("Patient not found"),
            InvoiceError::Billing(e) => e.into(),
            InvoiceError::Database(e) => database(&e),
        }
    }
}

impl From<NotificationError> for ApiError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::NotFound(_) => Self::not_found("Notification not found"),
            NotificationError::Database(e) => database(&e),
        }
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::PatientNotFound(_) => Self::not_found("Patient not found"),
            RecordError::Database(e) => database(&e),
        }
    }
}
