//! Patient history: medical records plus everything else attached to a patient.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Serialize;
use uuid::Uuid;
use vera_core::clinic::NewRecord;

use crate::entities::{appointments, invoices, patient_records, patients};

/// Error types for medical record and history operations.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Patient not found.
    #[error("Patient not found: {0}")]
    PatientNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// A patient with their appointments, invoices and medical records.
#[derive(Debug, Clone, Serialize)]
pub struct PatientHistory {
    /// The patient.
    pub patient: patients::Model,
    /// Appointments, newest first.
    pub appointments: Vec<appointments::Model>,
    /// Invoices, newest first.
    pub invoices: Vec<invoices::Model>,
    /// Medical records, newest first.
    pub records: Vec<patient_records::Model>,
}

/// Repository for medical records and the patient timeline.
#[derive(Debug, Clone)]
pub struct HistoryRepository {
    db: DatabaseConnection,
}

impl HistoryRepository {
    /// Creates a new history repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn patient(&self, patient_id: Uuid) -> Result<patients::Model, RecordError> {
        patients::Entity::find_by_id(patient_id)
            .one(&self.db)
            .await?
            .ok_or(RecordError::PatientNotFound(patient_id))
    }

    /// Collects everything recorded for a patient.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::PatientNotFound`] if the patient does not exist.
    pub async fn history(&self, patient_id: Uuid) -> Result<PatientHistory, RecordError> {
        let patient = self.patient(patient_id).await?;

        let appointments = appointments::Entity::find()
            .filter(appointments::Column::PatientId.eq(patient_id))
            .order_by_desc(appointments::Column::CreatedAt)
            .all(&self.db)
            .await?;

        let invoices = invoices::Entity::find()
            .filter(invoices::Column::PatientId.eq(patient_id))
            .order_by_desc(invoices::Column::CreatedAt)
            .all(&self.db)
            .await?;

        let records = self.fetch_records(patient_id).await?;

        Ok(PatientHistory {
            patient,
            appointments,
            invoices,
            records,
        })
    }

    /// Lists the medical records of a patient, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::PatientNotFound`] if the patient does not exist.
    pub async fn records(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<patient_records::Model>, RecordError> {
        self.patient(patient_id).await?;
        self.fetch_records(patient_id).await
    }

    async fn fetch_records(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<patient_records::Model>, RecordError> {
        let rows = patient_records::Entity::find()
            .filter(patient_records::Column::PatientId.eq(patient_id))
            .order_by_desc(patient_records::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Adds a medical record to a patient's history.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::PatientNotFound`] if the patient does not exist.
    pub async fn add_record(
        &self,
        patient_id: Uuid,
        input: NewRecord,
    ) -> Result<patient_records::Model, RecordError> {
        self.patient(patient_id).await?;

        let now = chrono::Utc::now().into();
        let record = patient_records::ActiveModel {
            id: Set(Uuid::new_v4()),
            patient_id: Set(patient_id),
            record_type: Set(input.record_type.into()),
            title: Set(input.title),
            description: Set(input.description),
            diagnosis: Set(input.diagnosis),
            treatment: Set(input.treatment),
            event_date: Set(input.event_date),
            created_by: Set(input.created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = record.insert(&self.db).await?;
        Ok(result)
    }
}
