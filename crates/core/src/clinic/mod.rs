//! Patients, doctors, appointments, notifications and medical records.
//!
//! Request validation for everything the front desk enters apart from
//! invoices, which live in [`crate::billing`].

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::ClinicError;
pub use types::{AppointmentStatus, Gender, NotificationKind, RecordType};
pub use validation::{
    AppointmentChanges, AppointmentInput, AppointmentPatch, DoctorChanges, DoctorInput,
    NewAppointment, NewDoctor, NewNotification, NewPatient, NewRecord, NotificationInput,
    PatientInput, RecordInput, full_name, parse_time,
};
