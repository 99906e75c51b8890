//! Folder move job handler.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use assethub_engine::lifecycle::FOLDER_MOVE_JOB_TYPE;
use assethub_engine::MoveOrchestrator;
use assethub_entity::assetstore::AssetstoreStore;
use assethub_entity::folder::FolderStore;
use assethub_entity::job::Job;
use assethub_entity::user::UserStore;

use crate::executor::{JobExecutionError, JobHandler};

/// The arguments of a queued folder move request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderMovePayload {
    /// The user the move runs as.
    pub user_id: Uuid,
    /// The root folder to move.
    pub folder_id: Uuid,
    /// The target assetstore.
    pub assetstore_id: Uuid,
    /// Skip files that were ingested by reference.
    #[serde(default)]
    pub ignore_imported: bool,
    /// Report progress while moving.
    #[serde(default = "default_progress")]
    pub progress: bool,
}

fn default_progress() -> bool {
    true
}

/// Handles queued folder move requests by running the move engine.
pub struct FolderMoveJobHandler {
    users: Arc<dyn UserStore>,
    folders: Arc<dyn FolderStore>,
    assetstores: Arc<dyn AssetstoreStore>,
    orchestrator: Arc<MoveOrchestrator>,
}

impl FolderMoveJobHandler {
    /// Create a new folder move job handler.
    pub fn new(
        users: Arc<dyn UserStore>,
        folders: Arc<dyn FolderStore>,
        assetstores: Arc<dyn AssetstoreStore>,
        orchestrator: Arc<MoveOrchestrator>,
    ) -> Self {
        Self {
            users,
            folders,
            assetstores,
            orchestrator,
        }
    }
}

#[async_trait]
impl JobHandler for FolderMoveJobHandler {
    fn job_type(&self) -> &str {
        FOLDER_MOVE_JOB_TYPE
    }

    async fn execute(&self, job: &Job) -> Result<Option<Value>, JobExecutionError> {
        let payload: FolderMovePayload =
            serde_json::from_value(job.payload.clone()).map_err(|e| {
                JobExecutionError::Permanent(format!("Invalid folder move payload: {e}"))
            })?;

        let user = self
            .users
            .find_by_id(payload.user_id)
            .await?
            .ok_or_else(|| {
                JobExecutionError::Permanent(format!("User {} not found", payload.user_id))
            })?;

        let folder = self
            .folders
            .find_by_id(payload.folder_id)
            .await?
            .ok_or_else(|| {
                JobExecutionError::Permanent(format!("Folder {} not found", payload.folder_id))
            })?;

        let target = self
            .assetstores
            .find_by_id(payload.assetstore_id)
            .await?
            .ok_or_else(|| {
                JobExecutionError::Permanent(format!(
                    "Assetstore {} not found",
                    payload.assetstore_id
                ))
            })?;

        let (move_job_id, outcome) = self
            .orchestrator
            .move_folder_tracked(
                &user,
                &folder,
                &target,
                payload.ignore_imported,
                payload.progress,
            )
            .await?;

        Ok(Some(serde_json::json!({
            "outcome": outcome.to_string(),
            "files_moved": outcome.receipts().map(|r| r.len()),
            "move_job_id": move_job_id,
        })))
    }
}

impl std::fmt::Debug for FolderMoveJobHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderMoveJobHandler").finish()
    }
}
