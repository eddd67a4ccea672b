use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;

use super::context::NotificationContext;
use super::{NotificationError, Notifier};
use crate::config::NotifyConfig;
use crate::labels::PLACEHOLDER;

/// Summarise an intake as one line of text for the local event command.
///
/// Codes are passed through raw; the reader is expected to open the file.
pub fn build_text(ctx: &NotificationContext, instructions: &str) -> String {
    let submission = &ctx.record.submission;
    let field = |key: &str| submission.text(key).unwrap_or_else(|| PLACEHOLDER.to_string());

    let name = submission.text("name").unwrap_or_else(|| "Unknown".to_string());
    let goals = match submission.get("goals") {
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => field("goals"),
    };

    let mut parts = vec![
        format!("New client intake from {name} ({}).", field("business")),
        format!(
            "Goals: {goals} | Budget: {} | Timeline: {}.",
            field("budget"),
            field("timeline")
        ),
    ];
    if let Some(channel) = submission.text("channel") {
        parts.push(format!("Follow up in chat channel {channel}."));
    }
    parts.push(format!("Full intake at {}.", ctx.file.display()));
    if !instructions.is_empty() {
        parts.push(instructions.to_string());
    }

    parts.join(" ")
}

/// Runs `<program> system event --text <summary> --mode now`.
///
/// The child gets a cleared environment holding only `PATH` (and `HOME` when
/// set) and is killed if it outlives the timeout.
pub struct SystemEventNotifier {
    program: String,
    search_path: String,
    timeout: Duration,
    instructions: String,
}

impl SystemEventNotifier {
    pub fn new(program: String, config: &NotifyConfig) -> Self {
        Self {
            program,
            search_path: config.search_path.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            instructions: config.instructions.clone(),
        }
    }

    fn command(&self, text: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["system", "event", "--text", text, "--mode", "now"])
            .env_clear()
            .env("PATH", &self.search_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(home) = std::env::var_os("HOME") {
            cmd.env("HOME", home);
        }
        cmd
    }
}

#[async_trait]
impl Notifier for SystemEventNotifier {
    fn id(&self) -> &str {
        "system-event"
    }

    async fn notify(&self, ctx: &NotificationContext) -> Result<(), NotificationError> {
        let text = build_text(ctx, &self.instructions);
        let mut cmd = self.command(&text);

        // Dropping the output future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(NotificationError::from(format!(
                    "Failed to run {}: {e}",
                    self.program
                )));
            }
            Err(_) => {
                return Err(NotificationError::from(format!(
                    "{} timed out after {}s",
                    self.program,
                    self.timeout.as_secs()
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr: String = stderr.trim().chars().take(512).collect();
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(NotificationError::from(format!(
                "{} exited with {code}: {stderr}",
                self.program
            )));
        }

        Ok(())
    }
}
