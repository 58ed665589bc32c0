//! Request extractors that report failures in the API's error format.

use axum::extract::{FromRequest, FromRequestParts};
use uuid::Uuid;
use vera_core::input::parse_id;

use crate::ApiError;

/// JSON body; a malformed body becomes a 400 [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Query string; a malformed query becomes a 400 [`ApiError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryParams<T>(pub T);

/// Parses a record id taken from the path.
///
/// # Errors
///
/// Returns a 400 [`ApiError`] when the id is not a UUID.
pub fn record_id(raw: &str) -> Result<Uuid, ApiError> {
    parse_id(raw).ok_or_else(|| ApiError::bad_request("Invalid id"))
}
