//! Lenient decoding of operator-entered fields.
//!
//! The dashboard posts form values as-is: numbers may arrive as JSON numbers or
//! strings, and enum-like fields may hold anything. These types accept whatever
//! was sent so that the domain rules (not the JSON parser) decide what is valid.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use uuid::Uuid;

/// A numeric field as received from a request body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A JSON number or a numeric string.
    Decimal(Decimal),
    /// Anything else (blank strings, booleans, text).
    Raw(serde_json::Value),
}

impl NumericInput {
    /// Returns the decimal value, if the input is numeric.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(value) => Some(*value),
            Self::Raw(serde_json::Value::String(s)) => parse_decimal(s),
            Self::Raw(_) => None,
        }
    }

    /// Returns true for an empty or whitespace-only string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Raw(serde_json::Value::String(s)) if s.trim().is_empty())
    }
}

impl From<Decimal> for NumericInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

/// Parses a decimal from text, accepting plain and scientific notation.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Parses a calendar date sent as `YYYY-MM-DD` or as a full RFC 3339 timestamp.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

/// Parses a record id.
#[must_use]
pub fn parse_id(text: &str) -> Option<Uuid> {
    Uuid::parse_str(text.trim()).ok()
}

/// Deserializes an optional field as text, whatever JSON type it was sent as.
///
/// `null` becomes `None`; numbers and booleans are kept in their JSON spelling so
/// that enum fallbacks see them as unrecognized values instead of rejecting the body.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Returns the trimmed text when it is not blank.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
