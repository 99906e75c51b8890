//! Job store contract.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_core::result::AppResult;

use super::model::{CreateJob, Job};
use super::status::JobStatus;

/// A partial update applied to a job record.
///
/// `log` is appended, never overwritten. `status` replaces the current
/// status when present.
#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    /// A log line to append (already timestamp-prefixed).
    pub log: Option<String>,
    /// A new status to set.
    pub status: Option<JobStatus>,
}

impl JobUpdate {
    /// An update that only appends a log line.
    pub fn log_line(line: impl Into<String>) -> Self {
        Self {
            log: Some(line.into()),
            status: None,
        }
    }

    /// An update that appends a log line and sets a status.
    pub fn log_and_status(line: impl Into<String>, status: JobStatus) -> Self {
        Self {
            log: Some(line.into()),
            status: Some(status),
        }
    }

    /// An update that only sets a status.
    pub fn status(status: JobStatus) -> Self {
        Self {
            log: None,
            status: Some(status),
        }
    }
}

/// Access to the authoritative job records.
///
/// The job record is shared mutable state with exactly one external
/// writer: an actor outside this system may flip the status to
/// `Canceled` at any time. [`JobStore::reload`] must therefore always
/// perform a fresh read — a cached job is useless as a cancellation
/// signal. Everything this system writes goes through
/// [`JobStore::update`], which appends to the log and never rewrites it.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Create a new job in the `Inactive` state.
    async fn create(&self, job: CreateJob) -> AppResult<Job>;

    /// Reload a job from the authoritative store.
    ///
    /// This is a fresh read and can observe writes made outside this
    /// component. Fails with a not-found error if the job is missing.
    async fn reload(&self, id: Uuid) -> AppResult<Job>;

    /// Apply a partial update and return the updated job.
    async fn update(&self, id: Uuid, update: JobUpdate) -> AppResult<Job>;
}
