//! Clinic validation errors.

use thiserror::Error;

/// Errors raised while validating patient, doctor, appointment,
/// notification and medical record requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClinicError {
    /// Patient first or last name missing.
    #[error("firstName and lastName are required")]
    MissingPatientName,

    /// Age is not a non-negative whole number.
    #[error("age must be a non-negative integer")]
    InvalidAge,

    /// Doctor name or specialisation missing.
    #[error("name and specialisation are required")]
    MissingDoctorFields,

    /// Appointment reference or schedule missing.
    #[error("patientId, doctorId, date, time are required")]
    MissingAppointmentFields,

    /// A referenced id is not a valid UUID.
    #[error("Invalid {0}")]
    InvalidId(&'static str),

    /// A date field is malformed.
    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(&'static str),

    /// The appointment time is malformed.
    #[error("time must be in HH:MM or HH:MM:SS format")]
    InvalidTime,

    /// Appointment status outside the known set.
    #[error("Unknown appointment status: {0}")]
    UnknownStatus(String),

    /// Medical record type outside the known set.
    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    /// Notification without text.
    #[error("message is required")]
    MissingMessage,

    /// Medical record without an event date.
    #[error("eventDate is required")]
    MissingEventDate,
}
