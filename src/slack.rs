use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationPayload {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
pub struct Attachment {
    pub fallback: String,
    pub color: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Serialize)]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub value: String,
    pub short: bool,
}

impl Field {
    pub fn titled(title: &str, value: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            value: value.to_string(),
            short: false,
        }
    }

    pub fn untitled(value: &str) -> Self {
        Self {
            title: None,
            value: value.to_string(),
            short: false,
        }
    }
}

/// What the webhook answered. The body is passed through untouched.
#[derive(Debug)]
pub struct WebhookResponse {
    pub status: StatusCode,
    pub body: String,
}

pub fn send_message(webhook_url: &Url, payload: &NotificationPayload) -> Result<WebhookResponse> {
    call_webhook(webhook_url, payload)
}

fn call_webhook(webhook_url: &Url, body: &NotificationPayload) -> Result<WebhookResponse> {
    let client = reqwest::blocking::Client::new();

    let response = client
        .post(webhook_url.clone())
        .header(CONTENT_TYPE, "application/json")
        .json(body)
        .send()?;

    let status = response.status();
    let body = response.text()?;

    Ok(WebhookResponse { status, body })
}
