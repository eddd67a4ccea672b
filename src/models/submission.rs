use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::labels::is_blank;

/// The answers posted by the onboarding form. Any JSON object is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission(Map<String, Value>);

impl Submission {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field rendered as display text. Missing and blank values are `None`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            v if is_blank(v) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Submission {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
