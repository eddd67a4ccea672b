use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    MalformedInput(String),
    Persistence(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MalformedInput(msg) => write!(f, "Malformed input: {msg}"),
            AppError::Persistence(msg) => write!(f, "Persistence error: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MalformedInput(msg) => {
                tracing::warn!("Submission rejected: {msg}");
                submission_failure(self.to_string())
            }
            AppError::Persistence(msg) => {
                tracing::error!("Submission not saved: {msg}");
                submission_failure(self.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
            }
        }
    }
}

// Both pipeline failures surface as the same 500 shape.
fn submission_failure(error: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "ok": false, "error": error })),
    )
        .into_response()
}
