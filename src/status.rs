use anyhow::{bail, Error};
use std::fmt::Formatter;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Success,
    Cancelled,
    Failure,
}

/// How a job outcome is rendered in the Slack message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub description: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

impl JobStatus {
    pub fn style(self) -> StatusStyle {
        let (description, emoji, color) = match self {
            JobStatus::Success => ("ran", "🎉", "good"),
            JobStatus::Cancelled => ("cancelled", "💥", "warning"),
            JobStatus::Failure => ("failed", "💥", "danger"),
        };

        StatusStyle {
            description,
            emoji,
            color,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            JobStatus::Success => "success",
            JobStatus::Cancelled => "cancelled",
            JobStatus::Failure => "failure",
        }
    }
}

impl FromStr for JobStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(JobStatus::Success),
            "cancelled" => Ok(JobStatus::Cancelled),
            "failure" => Ok(JobStatus::Failure),
            other => bail!("Unknown job status `{}`", other),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_mapping() {
        let cases = [
            (JobStatus::Success, ("ran", "🎉", "good")),
            (JobStatus::Cancelled, ("cancelled", "💥", "warning")),
            (JobStatus::Failure, ("failed", "💥", "danger")),
        ];

        for (status, (description, emoji, color)) in cases {
            assert_eq!(
                status.style(),
                StatusStyle {
                    description,
                    emoji,
                    color
                }
            );
        }
    }

    #[test]
    fn test_parses_known_statuses() {
        for status in [JobStatus::Success, JobStatus::Cancelled, JobStatus::Failure] {
            assert_eq!(status.to_string().parse::<JobStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_rejects_unknown_status() {
        let err = "timeout".parse::<JobStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown job status `timeout`");
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert!("Success".parse::<JobStatus>().is_err());
    }
}
