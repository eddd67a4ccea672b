use std::path::PathBuf;

use crate::models::IntakeRecord;

pub struct NotificationContext {
    pub record: IntakeRecord,
    /// Where the record was written.
    pub file: PathBuf,
}
