//! Entity re-exports.

pub use super::appointments::Entity as Appointments;
pub use super::doctors::Entity as Doctors;
pub use super::invoices::Entity as Invoices;
pub use super::notifications::Entity as Notifications;
pub use super::patient_records::Entity as PatientRecords;
pub use super::patients::Entity as Patients;
