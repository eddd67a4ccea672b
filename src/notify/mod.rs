pub mod context;
pub mod system_event;
pub mod webhook;

use std::sync::Arc;

use async_trait::async_trait;

use context::NotificationContext;

#[derive(Debug)]
pub struct NotificationError {
    pub message: String,
}

impl std::fmt::Display for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NotificationError {}

impl From<String> for NotificationError {
    fn from(s: String) -> Self {
        NotificationError { message: s }
    }
}

impl From<&str> for NotificationError {
    fn from(s: &str) -> Self {
        NotificationError {
            message: s.to_string(),
        }
    }
}

/// A side channel told about every saved intake.
///
/// Notifiers run after the intake is on disk. Their errors are logged by the
/// caller and never reach the submitter.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn id(&self) -> &str;
    async fn notify(&self, ctx: &NotificationContext) -> Result<(), NotificationError>;
}

/// Run a notifier on its own task without waiting for it.
pub fn dispatch(
    notifier: Arc<dyn Notifier>,
    ctx: Arc<NotificationContext>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        notify_logged(notifier.as_ref(), &ctx).await;
    })
}

/// Run a notifier to completion, logging instead of returning its error.
pub async fn notify_logged(notifier: &dyn Notifier, ctx: &NotificationContext) {
    match notifier.notify(ctx).await {
        Ok(()) => tracing::debug!("Notifier {} delivered intake {}", notifier.id(), ctx.record.id),
        Err(e) => tracing::warn!(
            "Notifier {} failed for intake {}: {e}",
            notifier.id(),
            ctx.record.id
        ),
    }
}
