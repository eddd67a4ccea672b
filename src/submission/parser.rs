use serde_json::Value;

use crate::error::AppError;
use crate::models::Submission;

/// Decode a request body into a [`Submission`]. Only JSON objects are accepted.
pub fn parse_body(body: &[u8]) -> Result<Submission, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::MalformedInput(format!("Invalid JSON: {e}")))?;

    match value {
        Value::Object(fields) => Ok(Submission::new(fields)),
        other => Err(AppError::MalformedInput(format!(
            "Expected a JSON object, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
