//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod appointment;
pub mod doctor;
pub mod history;
pub mod invoice;
pub mod notification;
pub mod patient;

pub use appointment::{AppointmentError, AppointmentRepository};
pub use doctor::{DoctorError, DoctorRepository};
pub use history::{HistoryRepository, PatientHistory, RecordError};
pub use invoice::{InvoiceError, InvoiceFilter, InvoiceRepository};
pub use notification::{NotificationError, NotificationRepository};
pub use patient::{PatientError, PatientRepository};
