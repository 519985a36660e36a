use crate::config::Config;
use crate::github::EventContext;
use crate::slack;
use crate::slack::{Attachment, Field, NotificationPayload, WebhookResponse};
use crate::status::JobStatus;
use anyhow::Result;

pub struct NotifyContent<'a> {
    pub status: JobStatus,
    pub github: &'a EventContext,
    pub custom_message: Option<&'a str>,
}

impl<'a> NotifyContent<'a> {
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            status: config.job_status,
            github: &config.github,
            custom_message: config.custom_message.as_deref(),
        }
    }
}

pub fn build_payload(content: &NotifyContent) -> NotificationPayload {
    let style = content.status.style();
    let github = content.github;

    let summary = format!(
        "{} {} <{}|{}> {}",
        github.actor,
        style.description,
        github.run_url(),
        github.workflow,
        style.emoji
    );

    let mut fields = vec![Field::titled(&github.repository, &summary)];

    if let Some(message) = content.custom_message.filter(|m| !m.is_empty()) {
        fields.push(Field::untitled(message));
    }

    NotificationPayload {
        attachments: vec![Attachment {
            fallback: format!("{} - {}", github.repository, summary),
            color: style.color.to_string(),
            fields,
        }],
    }
}

pub fn notify(config: &Config) -> Result<WebhookResponse> {
    let payload = build_payload(&NotifyContent::from_config(config));

    slack::send_message(&config.slack_webhook, &payload)
}
