use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Message attached to every successful submission response
pub const SUCCESS_MESSAGE: &str = "User data validated and processed successfully";

// ═══════════════════════════════════════════════════════════════════════════
// SUBMISSION TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// Canonical user record produced once a payload passes validation.
///
/// Fields keep the exact JSON value the client sent, so a numeric `30`
/// and a text `"30"` are echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub name: Value,
    pub email: Value,
    pub age: Value,
    pub phone: Value,
}

/// Body of a `200 OK` from `POST /submit`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitResponse {
    pub status: String,
    pub message: String,
    pub data: Submission,
}

impl SubmitResponse {
    pub fn success(data: Submission) -> Self {
        Self {
            status: "success".to_string(),
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// Stable error codes exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "ERR_MISSING_FIELDS")]
    MissingFields,
    #[serde(rename = "ERR_INVALID_EMAIL")]
    InvalidEmail,
    #[serde(rename = "ERR_INVALID_AGE")]
    InvalidAge,
    #[serde(rename = "ERR_INVALID_PHONE")]
    InvalidPhone,
    #[serde(rename = "ERR_INTERNAL")]
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingFields => "ERR_MISSING_FIELDS",
            ErrorCode::InvalidEmail => "ERR_INVALID_EMAIL",
            ErrorCode::InvalidAge => "ERR_INVALID_AGE",
            ErrorCode::InvalidPhone => "ERR_INVALID_PHONE",
            ErrorCode::Internal => "ERR_INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of every non-2xx response from `POST /submit`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub error: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            code,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_code_serializes_as_wire_string() {
        let body = ErrorBody::new(ErrorCode::InvalidPhone, "bad phone");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"code": "ERR_INVALID_PHONE", "error": "bad phone"}));
    }

    #[test]
    fn test_error_code_display_matches_serde() {
        for code in [
            ErrorCode::MissingFields,
            ErrorCode::InvalidEmail,
            ErrorCode::InvalidAge,
            ErrorCode::InvalidPhone,
            ErrorCode::Internal,
        ] {
            assert_eq!(serde_json::to_value(code).unwrap(), json!(code.to_string()));
        }
    }

    #[test]
    fn test_success_response_keeps_original_values() {
        let data = Submission {
            name: json!("A"),
            email: json!("a@b.com"),
            age: json!("30"),
            phone: json!(1234567890u64),
        };
        let value = serde_json::to_value(SubmitResponse::success(data)).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], SUCCESS_MESSAGE);
        assert_eq!(value["data"]["age"], json!("30"));
        assert_eq!(value["data"]["phone"], json!(1234567890u64));
    }
}
