//! Job status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a background job.
///
/// `Success`, `Error`, and `Canceled` are terminal from the engine's
/// perspective: no log entry is written after a job reaches one of them.
/// `Canceled` is never set by the engine itself — it is written by an
/// external actor and observed by the cancellation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Created but not yet queued or started.
    Inactive,
    /// Placed in a queue, waiting for a worker slot.
    Queued,
    /// Currently being processed by a worker.
    Running,
    /// Successfully completed.
    Success,
    /// Failed; the failure text is the last log entry.
    Error,
    /// Canceled by an external actor.
    Canceled,
}

impl JobStatus {
    /// Check if the job is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error | Self::Canceled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Success => "success",
            Self::Error => "error",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
