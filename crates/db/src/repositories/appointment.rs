//! Appointment repository.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;
use vera_core::clinic::{AppointmentChanges, NewAppointment};

use crate::entities::{appointments, doctors, patients};

/// Error types for appointment operations.
#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    /// Appointment not found.
    #[error("Appointment not found: {0}")]
    NotFound(Uuid),

    /// Referenced patient does not exist.
    #[error("Patient not found: {0}")]
    PatientNotFound(Uuid),

    /// Referenced doctor does not exist.
    #[error("Doctor not found: {0}")]
    DoctorNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Appointment repository for booking and scheduling.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    db: DatabaseConnection,
}

impl AppointmentRepository {
    /// Creates a new appointment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all appointments, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<appointments::Model>, AppointmentError> {
        let rows = appointments::Entity::find()
            .order_by_desc(appointments::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Fetches an appointment.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentError::NotFound`] if no appointment has this id.
    pub async fn get(&self, id: Uuid) -> Result<appointments::Model, AppointmentError> {
        appointments::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppointmentError::NotFound(id))
    }

    /// Books an appointment, copying the patient and doctor names onto it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The patient does not exist
    /// - The doctor does not exist
    pub async fn create(
        &self,
        input: NewAppointment,
    ) -> Result<appointments::Model, AppointmentError> {
        let patient = patients::Entity::find_by_id(input.patient_id)
            .one(&self.db)
            .await?
            .ok_or(AppointmentError::PatientNotFound(input.patient_id))?;

        let doctor = doctors::Entity::find_by_id(input.doctor_id)
            .one(&self.db)
            .await?
            .ok_or(AppointmentError::DoctorNotFound(input.doctor_id))?;

        let now = chrono::Utc::now().into();
        let appointment = appointments::ActiveModel {
            id: Set(Uuid::new_v4()),
            patient_id: Set(patient.id),
            patient_name: Set(patient.full_name()),
            doctor_id: Set(doctor.id),
            doctor_name: Set(doctor.name),
            date: Set(input.date),
            time: Set(input.time),
            status: Set(input.status.into()),
            reason: Set(input.reason),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = appointment.insert(&self.db).await?;
        Ok(result)
    }

    /// Reschedules an appointment or changes its status.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentError::NotFound`] if no appointment has this id.
    pub async fn update(
        &self,
        id: Uuid,
        changes: AppointmentChanges,
    ) -> Result<appointments::Model, AppointmentError> {
        let appointment = self.get(id).await?;

        let mut active: appointments::ActiveModel = appointment.into();
        if let Some(date) = changes.date {
            active.date = Set(date);
        }
        if let Some(time) = changes.time {
            active.time = Set(time);
        }
        if let Some(status) = changes.status {
            active.status = Set(status.into());
        }
        if let Some(reason) = changes.reason {
            active.reason = Set(reason);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Cancels and removes an appointment.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentError::NotFound`] if no appointment has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppointmentError> {
        let result = appointments::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppointmentError::NotFound(id));
        }
        Ok(())
    }
}
