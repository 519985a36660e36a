use crate::github::EventContext;
use crate::status::JobStatus;
use anyhow::{Context, Result};
use reqwest::Url;

#[derive(Debug)]
pub struct Config {
    pub job_status: JobStatus,
    pub github: EventContext,
    pub slack_webhook: Url,
    pub custom_message: Option<String>,
}

pub fn get_config() -> Result<Config> {
    get_config_from(|key| std::env::var(key).ok())
}

/// Reads every input up front so nothing is sent unless all of them are valid.
pub fn get_config_from(var: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let required = |key: &str| var(key).with_context(|| format!("{} is not set", key));

    let job_status = required("JOB_STATUS")?
        .parse::<JobStatus>()
        .context("Invalid JOB_STATUS")?;

    let github = EventContext::from_json(&required("GITHUB_ENVIRONMENT")?)
        .context("Invalid GITHUB_ENVIRONMENT")?;

    let slack_webhook =
        Url::parse(&required("SLACK_WEBHOOK")?).context("Invalid SLACK_WEBHOOK")?;

    let custom_message = var("CUSTOM_MESSAGE").filter(|m| !m.is_empty());

    Ok(Config {
        job_status,
        github,
        slack_webhook,
        custom_message,
    })
}
