//! Postgres enum types and their mapping to the domain enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maps a database enum onto its `vera-core` counterpart, variant for variant.
macro_rules! mirror_enum {
    ($db:ident <=> $domain:ty { $($variant:ident),+ $(,)? }) => {
        impl From<$domain> for $db {
            fn from(value: $domain) -> Self {
                type Domain = $domain;
                match value {
                    $(Domain::$variant => Self::$variant,)+
                }
            }
        }

        impl From<$db> for $domain {
            fn from(value: $db) -> Self {
                type Domain = $domain;
                match value {
                    $($db::$variant => Domain::$variant,)+
                }
            }
        }
    };
}

/// Invoice currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "currency_code")]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Central African CFA franc.
    #[sea_orm(string_value = "FCFA")]
    Fcfa,
    /// Euro.
    #[sea_orm(string_value = "EUR")]
    Eur,
    /// US dollar.
    #[sea_orm(string_value = "USD")]
    Usd,
}

mirror_enum!(CurrencyCode <=> vera_shared::Currency { Fcfa, Eur, Usd });

/// Invoice payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "invoice_status")]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    /// Settled.
    #[sea_orm(string_value = "PAID")]
    Paid,
    /// Open.
    #[sea_orm(string_value = "UNPAID")]
    Unpaid,
}

mirror_enum!(InvoiceStatus <=> vera_core::billing::InvoiceStatus { Paid, Unpaid });

/// Invoice payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_method")]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    /// Cash.
    #[sea_orm(string_value = "CASH")]
    Cash,
    /// Mobile money.
    #[sea_orm(string_value = "MOMO")]
    Momo,
    /// Bank card.
    #[sea_orm(string_value = "CARD")]
    Card,
}

mirror_enum!(PaymentMethod <=> vera_core::billing::PaymentMethod { Cash, Momo, Card });

/// Patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "gender")]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    /// Male.
    #[sea_orm(string_value = "MALE")]
    Male,
    /// Female.
    #[sea_orm(string_value = "FEMALE")]
    Female,
    /// Other or not given.
    #[sea_orm(string_value = "OTHER")]
    Other,
}

mirror_enum!(Gender <=> vera_core::clinic::Gender { Male, Female, Other });

/// Appointment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "appointment_status")]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    /// Booked.
    #[sea_orm(string_value = "PENDING")]
    Pending,
    /// Confirmed.
    #[sea_orm(string_value = "CONFIRMED")]
    Confirmed,
    /// Took place.
    #[sea_orm(string_value = "DONE")]
    Done,
    /// Called off.
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

mirror_enum!(AppointmentStatus <=> vera_core::clinic::AppointmentStatus {
    Pending,
    Confirmed,
    Done,
    Cancelled,
});

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "notification_type")]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationType {
    /// Informational.
    #[sea_orm(string_value = "INFO")]
    Info,
    /// Needs attention.
    #[sea_orm(string_value = "WARNING")]
    Warning,
}

mirror_enum!(NotificationType <=> vera_core::clinic::NotificationKind { Info, Warning });

/// Medical record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "record_type")]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// Consultation.
    #[sea_orm(string_value = "CONSULTATION")]
    Consultation,
    /// Exam.
    #[sea_orm(string_value = "EXAM")]
    Exam,
    /// Treatment.
    #[sea_orm(string_value = "TREATMENT")]
    Treatment,
    /// Hospital stay.
    #[sea_orm(string_value = "HOSPITALIZATION")]
    Hospitalization,
    /// Note.
    #[sea_orm(string_value = "NOTE")]
    Note,
    /// Other.
    #[sea_orm(string_value = "OTHER")]
    Other,
}

mirror_enum!(RecordType <=> vera_core::clinic::RecordType {
    Consultation,
    Exam,
    Treatment,
    Hospitalization,
    Note,
    Other,
});
