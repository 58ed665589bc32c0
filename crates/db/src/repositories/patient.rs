//! Patient repository.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;
use vera_core::clinic::NewPatient;

use crate::entities::patients;

/// Error types for patient operations.
#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    /// Patient not found.
    #[error("Patient not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Patient repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct PatientRepository {
    db: DatabaseConnection,
}

impl PatientRepository {
    /// Creates a new patient repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all patients, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<patients::Model>, PatientError> {
        let rows = patients::Entity::find()
            .order_by_desc(patients::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Fetches a patient.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::NotFound`] if no patient has this id.
    pub async fn get(&self, id: Uuid) -> Result<patients::Model, PatientError> {
        patients::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(PatientError::NotFound(id))
    }

    /// Registers a patient.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(&self, input: NewPatient) -> Result<patients::Model, PatientError> {
        let now = chrono::Utc::now().into();
        let patient = patients::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            phone: Set(input.phone),
            address: Set(input.address),
            age: Set(input.age),
            gender: Set(input.gender.into()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = patient.insert(&self.db).await?;
        Ok(result)
    }

    /// Replaces every editable field of a patient.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::NotFound`] if no patient has this id.
    pub async fn replace(
        &self,
        id: Uuid,
        input: NewPatient,
    ) -> Result<patients::Model, PatientError> {
        let patient = self.get(id).await?;

        let mut active: patients::ActiveModel = patient.into();
        active.first_name = Set(input.first_name);
        active.last_name = Set(input.last_name);
        active.phone = Set(input.phone);
        active.address = Set(input.address);
        active.age = Set(input.age);
        active.gender = Set(input.gender.into());
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a patient together with their appointments, invoices and records.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::NotFound`] if no patient has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), PatientError> {
        let result = patients::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(PatientError::NotFound(id));
        }
        Ok(())
    }
}
