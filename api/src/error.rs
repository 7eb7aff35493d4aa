use std::any::Any;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use shared::{ErrorBody, ErrorCode};
use thiserror::Error;
use uuid::Uuid;

/// Every way a submission request can fail.
///
/// The first four are client errors raised by validation. `Internal`
/// wraps any unexpected fault; its cause is logged, never sent.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Name, email, age, and phone are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Age must be a number between 18 and 120")]
    InvalidAge,
    #[error("Invalid phone number format (must be 10 digits)")]
    InvalidPhone,
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn internal(cause: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal(cause.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::MissingFields => ErrorCode::MissingFields,
            ApiError::InvalidEmail => ErrorCode::InvalidEmail,
            ApiError::InvalidAge => ErrorCode::InvalidAge,
            ApiError::InvalidPhone => ErrorCode::InvalidPhone,
            ApiError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let correlation_id = Uuid::new_v4().to_string();

        match &self {
            ApiError::Internal(cause) => {
                tracing::error!(correlation_id = %correlation_id, error = ?cause, "request failed");
            }
            rejected => {
                tracing::debug!(correlation_id = %correlation_id, code = %rejected.code(), "submission rejected");
            }
        }

        let payload = ErrorBody::new(self.code(), self.to_string());
        let mut response = (self.status(), Json(payload)).into_response();
        if let Ok(value) = HeaderValue::from_str(&correlation_id) {
            response
                .headers_mut()
                .insert(header::HeaderName::from_static("x-correlation-id"), value);
        }
        response
    }
}

/// Response builder for `tower_http::catch_panic::CatchPanicLayer`.
///
/// Turns a handler panic into the same `ERR_INTERNAL` body as any other
/// internal failure.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
