//! Request validation for the clinic records.
//!
//! Each `*Input` is the raw request body; `normalize` either rejects it with a
//! [`ClinicError`] or returns the trimmed, typed values to store.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use uuid::Uuid;

use super::error::ClinicError;
use super::types::{AppointmentStatus, Gender, NotificationKind, RecordType};
use crate::input::{NumericInput, lenient_string, non_blank, parse_date, parse_id};

/// Builds the display name used on appointments and invoices.
#[must_use]
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name.trim(), last_name.trim())
}

/// Parses an appointment time given as `HH:MM` or `HH:MM:SS`.
#[must_use]
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

// ---------------------------------------------------------------------------
// Patients
// ---------------------------------------------------------------------------

/// Patient create/replace request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInput {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Age in years; blank means unknown.
    pub age: Option<NumericInput>,
    /// `MALE`, `FEMALE` or `OTHER`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

/// Validated patient fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: Option<i32>,
    /// Gender.
    pub gender: Gender,
    /// Phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
}

impl PatientInput {
    /// Validates a patient request.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::MissingPatientName`] when either name is blank and
    /// [`ClinicError::InvalidAge`] when the age is not a non-negative integer.
    pub fn normalize(&self) -> Result<NewPatient, ClinicError> {
        let (Some(first_name), Some(last_name)) = (
            non_blank(self.first_name.as_deref()),
            non_blank(self.last_name.as_deref()),
        ) else {
            return Err(ClinicError::MissingPatientName);
        };

        Ok(NewPatient {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age: parse_age(self.age.as_ref())?,
            gender: Gender::from_input(self.gender.as_deref()),
            phone: trimmed(self.phone.as_deref()),
            address: trimmed(self.address.as_deref()),
        })
    }
}

fn parse_age(age: Option<&NumericInput>) -> Result<Option<i32>, ClinicError> {
    let Some(age) = age.filter(|a| !a.is_blank()) else {
        return Ok(None);
    };
    let value = age.as_decimal().ok_or(ClinicError::InvalidAge)?;
    if value.is_sign_negative() || !value.fract().is_zero() {
        return Err(ClinicError::InvalidAge);
    }
    value.to_i32().map(Some).ok_or(ClinicError::InvalidAge)
}

// ---------------------------------------------------------------------------
// Doctors
// ---------------------------------------------------------------------------

/// Doctor create request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorInput {
    /// Full name.
    pub name: Option<String>,
    /// Medical speciality.
    pub specialisation: Option<String>,
    /// Phone number.
    pub telephone: Option<String>,
    /// Free-text availability (days, hours).
    #[serde(alias = "disponibilite")]
    pub availability: Option<String>,
}

/// Validated doctor fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    /// Full name.
    pub name: String,
    /// Medical speciality.
    pub specialisation: String,
    /// Phone number.
    pub telephone: String,
    /// Free-text availability.
    pub availability: String,
}

impl DoctorInput {
    /// Validates a doctor request.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::MissingDoctorFields`] when the name or
    /// specialisation is blank.
    pub fn normalize(&self) -> Result<NewDoctor, ClinicError> {
        let (Some(name), Some(specialisation)) = (
            non_blank(self.name.as_deref()),
            non_blank(self.specialisation.as_deref()),
        ) else {
            return Err(ClinicError::MissingDoctorFields);
        };

        Ok(NewDoctor {
            name: name.to_string(),
            specialisation: specialisation.to_string(),
            telephone: trimmed(self.telephone.as_deref()),
            availability: trimmed(self.availability.as_deref()),
        })
    }

    /// Validates a partial update; only supplied fields are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::MissingDoctorFields`] when the name or
    /// specialisation is supplied blank.
    pub fn changes(&self) -> Result<DoctorChanges, ClinicError> {
        let required = |value: &Option<String>| match value.as_deref() {
            None => Ok(None),
            Some(v) => non_blank(Some(v))
                .map(|v| Some(v.to_string()))
                .ok_or(ClinicError::MissingDoctorFields),
        };

        Ok(DoctorChanges {
            name: required(&self.name)?,
            specialisation: required(&self.specialisation)?,
            telephone: self.telephone.as_deref().map(|v| v.trim().to_string()),
            availability: self.availability.as_deref().map(|v| v.trim().to_string()),
        })
    }
}

/// Doctor fields to overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorChanges {
    /// Full name.
    pub name: Option<String>,
    /// Medical speciality.
    pub specialisation: Option<String>,
    /// Phone number.
    pub telephone: Option<String>,
    /// Free-text availability (days, hours).
    pub availability: Option<String>,
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

/// Appointment booking request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInput {
    /// Patient being seen.
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_id: Option<String>,
    /// Doctor seeing the patient.
    #[serde(default, deserialize_with = "lenient_string")]
    pub doctor_id: Option<String>,
    /// Day, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Time of day, `HH:MM`.
    pub time: Option<String>,
    /// Lifecycle status.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Reason for the visit.
    pub reason: Option<String>,
}

/// Validated booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    /// Patient being seen.
    pub patient_id: Uuid,
    /// Doctor seeing the patient.
    pub doctor_id: Uuid,
    /// Day of the visit.
    pub date: NaiveDate,
    /// Time of the visit.
    pub time: NaiveTime,
    /// Lifecycle status.
    pub status: AppointmentStatus,
    /// Reason for the visit.
    pub reason: String,
}

impl AppointmentInput {
    /// Validates a booking request.
    ///
    /// # Errors
    ///
    /// Returns a [`ClinicError`] when a required field is missing, an id, date
    /// or time is malformed, or the status is unknown.
    pub fn normalize(&self) -> Result<NewAppointment, ClinicError> {
        let (Some(patient_id), Some(doctor_id), Some(date), Some(time)) = (
            non_blank(self.patient_id.as_deref()),
            non_blank(self.doctor_id.as_deref()),
            non_blank(self.date.as_deref()),
            non_blank(self.time.as_deref()),
        ) else {
            return Err(ClinicError::MissingAppointmentFields);
        };

        Ok(NewAppointment {
            patient_id: parse_id(patient_id).ok_or(ClinicError::InvalidId("patientId"))?,
            doctor_id: parse_id(doctor_id).ok_or(ClinicError::InvalidId("doctorId"))?,
            date: parse_date(date).ok_or(ClinicError::InvalidDate("date"))?,
            time: parse_time(time).ok_or(ClinicError::InvalidTime)?,
            status: optional_status(self.status.as_deref())?.unwrap_or_default(),
            reason: trimmed(self.reason.as_deref()),
        })
    }
}

/// Appointment update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    /// Day, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Time of day, `HH:MM`.
    pub time: Option<String>,
    /// Lifecycle status.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Reason for the visit.
    pub reason: Option<String>,
}

/// Appointment fields to overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentChanges {
    /// New day.
    pub date: Option<NaiveDate>,
    /// New time.
    pub time: Option<NaiveTime>,
    /// New status.
    pub status: Option<AppointmentStatus>,
    /// Reason for the visit.
    pub reason: Option<String>,
}

impl AppointmentPatch {
    /// Validates the supplied fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ClinicError`] when a supplied date, time or status is invalid.
    pub fn changes(&self) -> Result<AppointmentChanges, ClinicError> {
        Ok(AppointmentChanges {
            date: self
                .date
                .as_deref()
                .map(|d| parse_date(d).ok_or(ClinicError::InvalidDate("date")))
                .transpose()?,
            time: self
                .time
                .as_deref()
                .map(|t| parse_time(t).ok_or(ClinicError::InvalidTime))
                .transpose()?,
            status: optional_status(self.status.as_deref())?,
            reason: self.reason.as_deref().map(|r| r.trim().to_string()),
        })
    }
}

fn optional_status(value: Option<&str>) -> Result<Option<AppointmentStatus>, ClinicError> {
    non_blank(value)
        .map(|s| AppointmentStatus::parse(s).ok_or_else(|| ClinicError::UnknownStatus(s.to_string())))
        .transpose()
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Notification create request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationInput {
    /// Text shown on the dashboard.
    pub message: Option<String>,
    /// `INFO` or `WARNING`.
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
}

/// Validated notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    /// Text shown on the dashboard.
    pub message: String,
    /// Severity.
    pub kind: NotificationKind,
}

impl NotificationInput {
    /// Validates a notification request.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::MissingMessage`] when the message is blank.
    pub fn normalize(&self) -> Result<NewNotification, ClinicError> {
        let message = non_blank(self.message.as_deref()).ok_or(ClinicError::MissingMessage)?;
        Ok(NewNotification {
            message: message.to_string(),
            kind: NotificationKind::from_input(self.kind.as_deref()),
        })
    }
}

// ---------------------------------------------------------------------------
// Medical records
// ---------------------------------------------------------------------------

/// Medical record create request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordInput {
    /// Record type; consultation when absent.
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub record_type: Option<String>,
    /// When the event happened.
    pub event_date: Option<String>,
    /// Short title.
    pub title: Option<String>,
    /// Details.
    pub description: Option<String>,
    /// Diagnosis, if any.
    pub diagnosis: Option<String>,
    /// Prescribed treatment, if any.
    pub treatment: Option<String>,
    /// Author of the entry.
    pub created_by: Option<String>,
}

/// Validated medical record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Record type.
    pub record_type: RecordType,
    /// When the event happened.
    pub event_date: NaiveDate,
    /// Short title.
    pub title: String,
    /// Details.
    pub description: String,
    /// Diagnosis.
    pub diagnosis: String,
    /// Prescribed treatment.
    pub treatment: String,
    /// Author of the entry.
    pub created_by: String,
}

impl RecordInput {
    /// Validates a medical record request.
    ///
    /// # Errors
    ///
    /// Returns a [`ClinicError`] when the event date is missing or malformed,
    /// or the record type is unknown.
    pub fn normalize(&self) -> Result<NewRecord, ClinicError> {
        let event_date =
            non_blank(self.event_date.as_deref()).ok_or(ClinicError::MissingEventDate)?;
        let event_date = parse_date(event_date).ok_or(ClinicError::InvalidDate("eventDate"))?;

        let record_type = match non_blank(self.record_type.as_deref()) {
            None => RecordType::default(),
            Some(t) => {
                RecordType::parse(t).ok_or_else(|| ClinicError::UnknownRecordType(t.to_string()))?
            }
        };

        Ok(NewRecord {
            record_type,
            event_date,
            title: trimmed(self.title.as_deref()),
            description: trimmed(self.description.as_deref()),
            diagnosis: trimmed(self.diagnosis.as_deref()),
            treatment: trimmed(self.treatment.as_deref()),
            created_by: trimmed(self.created_by.as_deref()),
        })
    }
}
