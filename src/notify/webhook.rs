use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::context::NotificationContext;
use super::{NotificationError, Notifier};
use crate::labels::{label, label_list, PLACEHOLDER};
use crate::models::Submission;

pub const EMBED_COLOR: u32 = 0x2563eb;

// Chat services reject embed fields longer than this.
const MAX_FIELD_CHARS: usize = 1024;
const MAX_TITLE_CHARS: usize = 256;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
}

impl EmbedField {
    fn block(name: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            value: truncate(value, MAX_FIELD_CHARS),
            inline: None,
        }
    }

    fn inline(name: &str, value: String) -> Self {
        Self {
            inline: Some(true),
            ..Self::block(name, value)
        }
    }
}

/// Project a submission into the chat embed announcing it.
pub fn build_payload(
    submission: &Submission,
    studio_name: &str,
    rendered_at: DateTime<Local>,
) -> WebhookPayload {
    let text = |key: &str| submission.text(key).unwrap_or_else(|| PLACEHOLDER.to_string());
    let name = submission.text("name").unwrap_or_else(|| "Unknown".to_string());

    let fields = vec![
        EmbedField::inline("Name", text("name")),
        EmbedField::inline(
            "Source",
            submission.text("source").unwrap_or_else(|| "direct".to_string()),
        ),
        EmbedField::block("Business", text("business")),
        EmbedField::inline("Existing Site", label(submission.get("existingSite"))),
        EmbedField::inline("URL", text("siteUrl")),
        EmbedField::block("Goals", label_list(submission.get("goals"))),
        EmbedField::block("Pages", label_list(submission.get("pages"))),
        EmbedField::block("Branding", label_list(submission.get("branding"))),
        EmbedField::block("Features", label_list(submission.get("features"))),
        EmbedField::block("Inspiration", text("inspiration")),
        EmbedField::inline("Timeline", label(submission.get("timeline"))),
        EmbedField::inline("Budget", label(submission.get("budget"))),
        EmbedField::block("Notes", text("notes")),
    ];

    WebhookPayload {
        embeds: vec![Embed {
            title: truncate(format!("New Onboarding — {name}"), MAX_TITLE_CHARS),
            color: EMBED_COLOR,
            fields,
            footer: EmbedFooter {
                text: format!(
                    "{studio_name} Onboarding • {}",
                    rendered_at.format("%-m/%-d/%Y, %-I:%M:%S %p")
                ),
            },
        }],
    }
}

fn truncate(value: String, max: usize) -> String {
    if value.chars().count() <= max {
        return value;
    }
    let mut cut: String = value.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Posts each intake to a chat webhook as a single embed.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    studio_name: String,
}

impl WebhookNotifier {
    pub fn new(url: String, studio_name: String, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build webhook client: {e}"))?;

        Ok(Self {
            client,
            url,
            studio_name,
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn id(&self) -> &str {
        "webhook"
    }

    async fn notify(&self, ctx: &NotificationContext) -> Result<(), NotificationError> {
        let payload = build_payload(&ctx.record.submission, &self.studio_name, Local::now());

        let resp = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotificationError::from(format!("Webhook request failed: {e}")))?;

        let status = resp.status();
        if status.as_u16() >= 400 {
            let body = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(256)
                .collect::<String>();
            return Err(NotificationError::from(format!(
                "Webhook responded {}: {body}",
                status.as_u16()
            )));
        }

        Ok(())
    }
}
