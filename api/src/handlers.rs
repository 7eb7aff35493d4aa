use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use shared::{Submission, SubmitResponse};

use crate::validation::Validated;

/// Accept a submission that already passed every validation rule
pub async fn submit(Validated(submission): Validated<Submission>) -> impl IntoResponse {
    tracing::info!("submission validated and processed");
    (StatusCode::OK, Json(SubmitResponse::success(submission)))
}

pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Route not found"})))
}
