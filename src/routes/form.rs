use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::SharedState;

/// Serve the onboarding form exactly as it is on disk.
pub async fn index(State(state): State<SharedState>) -> Result<Response, AppError> {
    let path = &state.config.form_path;
    let html = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read form {}: {e}", path.display())))?;

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response())
}
