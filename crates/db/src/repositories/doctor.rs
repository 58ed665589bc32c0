//! Doctor repository.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;
use vera_core::clinic::{DoctorChanges, NewDoctor};

use crate::entities::doctors;

/// Error types for doctor operations.
#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    /// Doctor not found.
    #[error("Doctor not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Doctor repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct DoctorRepository {
    db: DatabaseConnection,
}

impl DoctorRepository {
    /// Creates a new doctor repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all doctors, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<doctors::Model>, DoctorError> {
        let rows = doctors::Entity::find()
            .order_by_desc(doctors::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Fetches a doctor.
    ///
    /// # Errors
    ///
    /// Returns [`DoctorError::NotFound`] if no doctor has this id.
    pub async fn get(&self, id: Uuid) -> Result<doctors::Model, DoctorError> {
        doctors::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DoctorError::NotFound(id))
    }

    /// Registers a doctor.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(&self, input: NewDoctor) -> Result<doctors::Model, DoctorError> {
        let now = chrono::Utc::now().into();
        let doctor = doctors::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            specialisation: Set(input.specialisation),
            telephone: Set(input.telephone),
            availability: Set(input.availability),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = doctor.insert(&self.db).await?;
        Ok(result)
    }

    /// Updates the supplied fields of a doctor.
    ///
    /// # Errors
    ///
    /// Returns [`DoctorError::NotFound`] if no doctor has this id.
    pub async fn update(
        &self,
        id: Uuid,
        changes: DoctorChanges,
    ) -> Result<doctors::Model, DoctorError> {
        let doctor = self.get(id).await?;

        let mut active: doctors::ActiveModel = doctor.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(specialisation) = changes.specialisation {
            active.specialisation = Set(specialisation);
        }
        if let Some(telephone) = changes.telephone {
            active.telephone = Set(telephone);
        }
        if let Some(availability) = changes.availability {
            active.availability = Set(availability);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a doctor and their appointments.
    ///
    /// # Errors
    ///
    /// Returns [`DoctorError::NotFound`] if no doctor has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), DoctorError> {
        let result = doctors::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DoctorError::NotFound(id));
        }
        Ok(())
    }
}
