//! Field validators for submission payloads
//!
//! Each validator checks one rule and maps a failure to the `ApiError`
//! variant for that rule.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use super::coerce::{is_truthy, to_number, to_text};
use crate::error::ApiError;

/// Inclusive lower bound for `age`
pub const MIN_AGE: f64 = 18.0;
/// Inclusive upper bound for `age`
pub const MAX_AGE: f64 = 120.0;

lazy_static! {
    /// local-part@domain.tld with ASCII word characters and hyphens, 2-7 letter TLD
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@([A-Za-z0-9_-]+\.)+[a-zA-Z]{2,7}$"
    ).unwrap();

    /// Exactly ten decimal digits
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
}

/// Validate that every named field is present and truthy
pub fn validate_required(payload: &Map<String, Value>, fields: &[&str]) -> Result<(), ApiError> {
    if fields.iter().all(|field| is_truthy(payload.get(*field))) {
        Ok(())
    } else {
        Err(ApiError::MissingFields)
    }
}

/// Validate email shape
pub fn validate_email(email: &Value) -> Result<(), ApiError> {
    if !EMAIL_REGEX.is_match(&to_text(email)) {
        return Err(ApiError::InvalidEmail);
    }
    Ok(())
}

/// Validate age is numeric and within [`MIN_AGE`, `MAX_AGE`]
pub fn validate_age(age: &Value) -> Result<(), ApiError> {
    let value = to_number(age);
    // NaN fails both comparisons
    if !(MIN_AGE..=MAX_AGE).contains(&value) {
        return Err(ApiError::InvalidAge);
    }
    Ok(())
}

/// Validate phone is exactly ten digits
pub fn validate_phone(phone: &Value) -> Result<(), ApiError> {
    if !PHONE_REGEX.is_match(&to_text(phone)) {
        return Err(ApiError::InvalidPhone);
    }
    Ok(())
}
