use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::pipeline;

pub async fn submit(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    // Unreadable or oversized bodies get the same failure shape as bad JSON.
    let body = body.map_err(|rejection| AppError::MalformedInput(rejection.body_text()))?;

    let result = pipeline::run(&state, body).await?;

    Ok(Json(json!({ "ok": true, "id": result.id })))
}
