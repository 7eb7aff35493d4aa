//! Validation implementations for API request types

use serde_json::Value;
use shared::Submission;

use super::extractors::{Payload, Validatable};
use super::validators::{validate_age, validate_email, validate_phone, validate_required};
use crate::error::ApiError;

/// Fields every submission must carry, in presence-check order
const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "age", "phone"];

static NULL: Value = Value::Null;

// ─────────────────────────────────────────────────────────────────────────────
// Submission validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for Submission {
    /// Rules run in a fixed order and stop at the first failure
    fn validate(payload: &Payload) -> Result<(), ApiError> {
        validate_required(&payload.0, &REQUIRED_FIELDS)?;

        let field = |name: &str| payload.get(name).unwrap_or(&NULL);
        validate_email(field("email"))?;
        validate_age(field("age"))?;
        validate_phone(field("phone"))?;

        Ok(())
    }

    fn normalize(payload: Payload) -> Self {
        let mut fields = payload.into_inner();
        let mut take = |name: &str| fields.remove(name).unwrap_or_default();

        Submission {
            name: take("name"),
            email: take("email"),
            age: take("age"),
            phone: take("phone"),
        }
    }
}
