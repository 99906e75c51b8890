//! Job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::JobStatus;

/// A background job record.
///
/// The log is append-only and ordered: every entry carries a
/// `YYYY-MM-DD HH:MM:SS - ` prefix and entries are strictly increasing
/// in time because the traversal that writes them is sequential.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: Uuid,
    /// Job type identifier (e.g., `"folder_move"`).
    pub job_type: String,
    /// Human-readable title describing the operation.
    pub title: String,
    /// Current job status.
    pub status: JobStatus,
    /// Job-specific arguments (JSON), kept for audit and queue handlers.
    pub payload: serde_json::Value,
    /// Append-only ordered log of timestamped text entries.
    pub log: Vec<String>,
    /// User who requested the job.
    pub created_by: Option<Uuid>,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// When the job was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Check if the job has been canceled.
    pub fn is_canceled(&self) -> bool {
        self.status == JobStatus::Canceled
    }
}

/// Data required to create a new job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// Job type identifier.
    pub job_type: String,
    /// Human-readable title.
    pub title: String,
    /// Job-specific arguments.
    pub payload: serde_json::Value,
    /// User who requested the job.
    pub created_by: Option<Uuid>,
}
