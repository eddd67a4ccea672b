use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::Submission;

/// A submission as accepted by the server, with its assigned identity.
#[derive(Debug, Clone)]
pub struct IntakeRecord {
    pub id: u64,
    pub received_at: DateTime<Utc>,
    pub submission: Submission,
}

impl IntakeRecord {
    pub fn new(id: u64, received_at: DateTime<Utc>, submission: Submission) -> Self {
        Self {
            id,
            received_at,
            submission,
        }
    }

    /// ISO 8601 receipt time, e.g. `2026-02-18T09:30:00.123Z`.
    pub fn received_at_iso(&self) -> String {
        self.received_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// The persisted form: every submitted field plus `id` and `receivedAt`.
    /// Server-assigned fields replace any submitted keys of the same name.
    pub fn to_document(&self) -> Value {
        let mut doc = self.submission.fields().clone();
        doc.insert("id".to_string(), Value::from(self.id));
        doc.insert("receivedAt".to_string(), Value::String(self.received_at_iso()));
        Value::Object(doc)
    }
}
