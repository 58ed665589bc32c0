//! `SeaORM` entity definitions.

pub mod prelude;

pub mod appointments;
pub mod doctors;
pub mod invoices;
pub mod notifications;
pub mod patient_records;
pub mod patients;
pub mod sea_orm_active_enums;
