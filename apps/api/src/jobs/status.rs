use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle of a saved job. New matches start as `Interested`; the user may
/// then apply or dismiss, and both of those are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Interested,
    Applied,
    Dismissed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Interested => "interested",
            JobStatus::Applied => "applied",
            JobStatus::Dismissed => "dismissed",
        }
    }

    pub fn can_transition_to(self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (JobStatus::Interested, JobStatus::Applied)
                | (JobStatus::Interested, JobStatus::Dismissed)
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interested" => Ok(JobStatus::Interested),
            "applied" => Ok(JobStatus::Applied),
            "dismissed" => Ok(JobStatus::Dismissed),
            other => Err(format!("unknown job status '{other}'")),
        }
    }
}
