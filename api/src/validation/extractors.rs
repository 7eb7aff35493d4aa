//! Custom Axum extractors for submission payloads
//!
//! `Payload` decodes the raw key/value body (JSON or form-encoded) and
//! `Validated<T>` runs a `Validatable` type's rules over it before the
//! handler sees anything.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::{Map, Value};

use super::form::decode_pairs;
use crate::error::ApiError;

/// Body encodings the submission endpoint understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Unsupported,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return BodyKind::Unsupported;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Unsupported
    }
}

/// Raw key/value payload decoded from the request body.
///
/// Bodies that cannot carry fields (no content type, other media types,
/// zero-length JSON bodies, top-level JSON arrays) decode to an empty map.
/// Malformed JSON, including whitespace-only bodies, is an internal
/// failure rather than a validation error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(pub Map<String, Value>);

impl Payload {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Decode a JSON body
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.is_empty() {
            return Ok(Payload::default());
        }

        let value: Value = serde_json::from_slice(bytes)
            .map_err(|err| ApiError::internal(anyhow::Error::new(err).context("malformed JSON body")))?;

        match value {
            Value::Object(fields) => Ok(Payload(fields)),
            Value::Array(_) => Ok(Payload::default()),
            other => Err(ApiError::internal(anyhow::anyhow!(
                "JSON body must be an object or array, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Build from decoded form pairs, expanding bracket keys
    pub fn from_form_pairs(pairs: Vec<(String, String)>) -> Self {
        Payload(decode_pairs(pairs))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state).await.map_err(|err| {
                    ApiError::internal(anyhow::anyhow!(
                        "failed to read request body: {}",
                        err.body_text()
                    ))
                })?;
                Payload::from_json_bytes(&bytes)
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|err| {
                        ApiError::internal(anyhow::anyhow!(
                            "malformed form body: {}",
                            err.body_text()
                        ))
                    })?;
                Ok(Payload::from_form_pairs(pairs))
            }
            BodyKind::Unsupported => Ok(Payload::default()),
        }
    }
}

/// Trait for records built from a checked payload
pub trait Validatable: Sized {
    /// Check the payload, returning the first violated rule
    fn validate(payload: &Payload) -> Result<(), ApiError>;

    /// Build the record from a payload that passed `validate`
    fn normalize(payload: Payload) -> Self;
}

/// Extractor that decodes, validates and normalizes the body into `T`.
///
/// ```ignore
/// pub async fn submit(Validated(submission): Validated<Submission>) -> impl IntoResponse {
///     // submission passed every rule
/// }
/// ```
pub struct Validated<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Validated<T>
where
    T: Validatable + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = Payload::from_request(req, state).await?;
        T::validate(&payload)?;
        Ok(Validated(T::normalize(payload)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/submit");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[test]
    fn test_body_kind() {
        assert_eq!(body_kind(&request(Some("application/json"), "")), BodyKind::Json);
        assert_eq!(
            body_kind(&request(Some("Application/JSON; charset=utf-8"), "")),
            BodyKind::Json
        );
        assert_eq!(
            body_kind(&request(Some("application/merge-patch+json"), "")),
            BodyKind::Unsupported
        );
        assert_eq!(
            body_kind(&request(Some("application/x-www-form-urlencoded"), "")),
            BodyKind::Form
        );
        assert_eq!(body_kind(&request(Some("text/plain"), "")), BodyKind::Unsupported);
        assert_eq!(body_kind(&request(None, "")), BodyKind::Unsupported);
    }

    #[test]
    fn test_from_json_bytes() {
        let payload = Payload::from_json_bytes(br#"{"name": "A", "age": 30}"#).unwrap();
        assert_eq!(payload.get("name"), Some(&json!("A")));
        assert_eq!(payload.get("age"), Some(&json!(30)));

        assert_eq!(Payload::from_json_bytes(b"").unwrap(), Payload::default());
        assert_eq!(Payload::from_json_bytes(b"[1, 2]").unwrap(), Payload::default());
    }

    #[test]
    fn test_from_json_bytes_failures_are_internal() {
        let bodies: [&[u8]; 5] = [b"{not json", b"  \n", b"\"text\"", b"42", b"null"];
        for body in bodies {
            let err = Payload::from_json_bytes(body).unwrap_err();
            assert!(matches!(err, ApiError::Internal(_)), "body {:?}", body);
        }
    }

    #[test]
    fn test_from_form_pairs_expands_brackets() {
        let payload = Payload::from_form_pairs(vec![
            ("name".to_string(), "A".to_string()),
            ("age[]".to_string(), "30".to_string()),
        ]);
        assert_eq!(payload.get("name"), Some(&json!("A")));
        assert_eq!(payload.get("age"), Some(&json!(["30"])));
    }

    #[tokio::test]
    async fn test_extract_form_body() {
        let req = request(
            Some("application/x-www-form-urlencoded"),
            "name=Ann+Lee&email=a%40b.com&age=30&phone=1234567890",
        );
        let payload = Payload::from_request(req, &()).await.unwrap();
        assert_eq!(payload.get("name"), Some(&json!("Ann Lee")));
        assert_eq!(payload.get("email"), Some(&json!("a@b.com")));
        assert_eq!(payload.get("age"), Some(&json!("30")));
    }

    #[tokio::test]
    async fn test_extract_unsupported_body_is_empty() {
        let req = request(Some("text/plain"), "name=A");
        let payload = Payload::from_request(req, &()).await.unwrap();
        assert!(payload.into_inner().is_empty());
    }
}
