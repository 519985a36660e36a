use anyhow::Result;
use serde::{Deserialize, Deserializer};

/// The subset of the Actions `github` context needed to describe a run.
#[derive(Debug, Clone, Deserialize)]
pub struct EventContext {
    pub actor: String,
    pub workflow: String,
    pub repository: String,
    #[serde(deserialize_with = "string_or_number")]
    pub run_id: String,
    pub event: Event,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub repository: Repository,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
}

impl EventContext {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn run_url(&self) -> String {
        format!(
            "{}/actions/runs/{}",
            self.event.repository.html_url, self.run_id
        )
    }
}

// GitHub renders run_id as a string, but hand-written contexts often use a number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RunId {
        Text(String),
        Number(u64),
    }

    Ok(match RunId::deserialize(deserializer)? {
        RunId::Text(s) => s,
        RunId::Number(n) => n.to_string(),
    })
}
