//! Job lifecycle manager.
//!
//! Owns every status transition and log write the engine makes:
//! `Inactive -> Running -> {Success, Error}`. `Canceled` is reachable
//! from `Running` only through an external actor; this component never
//! sets it, it is observed by the [`crate::gate::CancellationGate`].

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use assethub_core::result::AppResult;
use assethub_entity::assetstore::Assetstore;
use assethub_entity::folder::Folder;
use assethub_entity::job::{CreateJob, Job, JobStatus, JobStore, JobUpdate};
use assethub_entity::user::User;

/// Job type identifier for folder moves.
pub const FOLDER_MOVE_JOB_TYPE: &str = "folder_move";

/// Manages the move job's status transitions and append-only log.
#[derive(Clone)]
pub struct JobLifecycle {
    jobs: Arc<dyn JobStore>,
}

impl JobLifecycle {
    /// Create a lifecycle manager over the given job store.
    pub fn new(jobs: Arc<dyn JobStore>) -> Self {
        Self { jobs }
    }

    /// Create the move job and transition it to `Running`.
    pub async fn start(
        &self,
        user: &User,
        folder: &Folder,
        target: &Assetstore,
        ignore_imported: bool,
    ) -> AppResult<Job> {
        let job = self
            .jobs
            .create(CreateJob {
                job_type: FOLDER_MOVE_JOB_TYPE.to_string(),
                title: format!(
                    "Move folder \"{}\" to assetstore \"{}\"",
                    folder.name, target.name
                ),
                payload: serde_json::json!({
                    "folder_id": folder.id,
                    "assetstore_id": target.id,
                    "ignore_imported": ignore_imported,
                }),
                created_by: Some(user.id),
            })
            .await?;

        tracing::info!(
            job_id = %job.id,
            folder = %folder.name,
            assetstore = %target.name,
            "Starting folder move"
        );

        self.jobs
            .update(
                job.id,
                JobUpdate::log_and_status(
                    stamp(&format!(
                        "Starting folder move \"{}\" to assetstore \"{}\" ({})",
                        folder.name, target.name, target.id
                    )),
                    JobStatus::Running,
                ),
            )
            .await
    }

    /// Append a timestamped line to the job log.
    pub async fn append(&self, job_id: Uuid, message: &str) -> AppResult<Job> {
        self.jobs
            .update(job_id, JobUpdate::log_line(stamp(message)))
            .await
    }

    /// Record normal completion of the full traversal.
    pub async fn succeed(&self, job_id: Uuid) -> AppResult<Job> {
        self.jobs
            .update(
                job_id,
                JobUpdate::log_and_status(stamp("Finished folder move."), JobStatus::Success),
            )
            .await
    }

    /// Record a non-cancellation failure of the traversal.
    pub async fn fail(&self, job_id: Uuid, error_text: &str) -> AppResult<Job> {
        self.jobs
            .update(
                job_id,
                JobUpdate::log_and_status(
                    stamp(&format!("Failed with {error_text}")),
                    JobStatus::Error,
                ),
            )
            .await
    }
}

impl std::fmt::Debug for JobLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobLifecycle").finish()
    }
}

/// Prefix a log message with the fixed-format timestamp.
fn stamp(message: &str) -> String {
    format!("{} - {}", Utc::now().format("%Y-%m-%d %H:%M:%S"), message)
}
