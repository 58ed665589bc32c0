//! Clinic enumerations.
//!
//! Some fields fall back to a default when the dashboard sends something
//! unexpected (gender, notification type); others are rejected (appointment
//! status, record type). `from_input` marks the lenient ones, `parse` the
//! strict ones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or not given.
    #[default]
    Other,
}

impl Gender {
    /// Reads a gender, falling back to [`Gender::Other`].
    #[must_use]
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_uppercase()).as_deref() {
            Some("MALE") => Self::Male,
            Some("FEMALE") => Self::Female,
            _ => Self::Other,
        }
    }

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    /// Booked, not yet confirmed.
    #[default]
    Pending,
    /// Confirmed with the patient.
    Confirmed,
    /// The visit took place.
    Done,
    /// Called off.
    Cancelled,
}

impl AppointmentStatus {
    /// Parses a status, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "DONE" => Some(Self::Done),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Done => "DONE",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a dashboard notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationKind {
    /// Informational.
    #[default]
    Info,
    /// Needs attention.
    Warning,
}

impl NotificationKind {
    /// Reads a notification type, falling back to [`NotificationKind::Info`].
    #[must_use]
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_uppercase()).as_deref() {
            Some("WARNING") => Self::Warning,
            _ => Self::Info,
        }
    }

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }
}

/// Kind of entry in a patient's medical history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// Consultation.
    #[default]
    Consultation,
    /// Exam or lab test.
    Exam,
    /// Treatment.
    Treatment,
    /// Hospital stay.
    Hospitalization,
    /// Free-form note.
    Note,
    /// Anything else.
    Other,
}

impl RecordType {
    /// Parses a record type, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CONSULTATION" => Some(Self::Consultation),
            "EXAM" => Some(Self::Exam),
            "TREATMENT" => Some(Self::Treatment),
            "HOSPITALIZATION" => Some(Self::Hospitalization),
            "NOTE" => Some(Self::Note),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Consultation => "CONSULTATION",
            Self::Exam => "EXAM",
            Self::Treatment => "TREATMENT",
            Self::Hospitalization => "HOSPITALIZATION",
            Self::Note => "NOTE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
