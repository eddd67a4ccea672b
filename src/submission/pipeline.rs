use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;

use crate::error::AppError;
use crate::models::IntakeRecord;
use crate::notify::{self, context::NotificationContext};
use crate::state::SharedState;

use super::parser;

pub struct PipelineResult {
    pub id: u64,
    pub file: PathBuf,
}

/// Accept one submission: decode, save, notify.
///
/// Decode and save failures abort before anything else happens. Once the
/// file is written the intake counts as accepted; the webhook is left running
/// in the background and the system event is awaited but its outcome is only
/// logged.
pub async fn run(state: &SharedState, body: Bytes) -> Result<PipelineResult, AppError> {
    let submission = parser::parse_body(&body)?;

    let (id, received_at) = state.ids.next();
    let record = IntakeRecord::new(id, received_at, submission);

    let file = state.store.save(&record).await?;

    tracing::info!(
        "Intake from {} ({}) saved to {}",
        record.submission.text("name").as_deref().unwrap_or("Unknown"),
        record.submission.text("business").as_deref().unwrap_or("—"),
        file.display()
    );

    let ctx = Arc::new(NotificationContext {
        record,
        file: file.clone(),
    });

    if let Some(webhook) = &state.webhook {
        notify::dispatch(webhook.clone(), ctx.clone());
    }

    if let Some(system_event) = &state.system_event {
        notify::notify_logged(system_event.as_ref(), &ctx).await;
    }

    Ok(PipelineResult { id, file })
}
