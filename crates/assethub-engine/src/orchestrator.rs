//! Top-level move orchestrator.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use assethub_core::config::transfer::TransferConfig;
use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::{ProgressContext, ProgressSink, TimeBudget};
use assethub_entity::assetstore::{Assetstore, AssetstoreTransfer, MoveReceipt};
use assethub_entity::file::FileStore;
use assethub_entity::folder::{Folder, FolderStore};
use assethub_entity::job::JobStore;
use assethub_entity::user::User;

use crate::gate::CancellationGate;
use crate::lifecycle::JobLifecycle;
use crate::mover::FileMover;
use crate::walker::{TreeWalker, WalkOutcome};

/// The caller-visible result of a folder move.
///
/// Failure carries no detail: the error text lives in the job log,
/// which is the diagnostic channel for asynchronous moves.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// Every qualifying file was moved, in traversal order.
    Completed(Vec<MoveReceipt>),
    /// The job was canceled; displays as the literal `Job canceled`.
    Cancelled,
    /// The move failed; diagnose via the job log.
    Failed,
}

impl MoveOutcome {
    /// The receipts of a completed move, if any.
    pub fn receipts(&self) -> Option<&[MoveReceipt]> {
        match self {
            Self::Completed(receipts) => Some(receipts),
            _ => None,
        }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(receipts) => write!(f, "Moved {} file(s)", receipts.len()),
            Self::Cancelled => write!(f, "Job canceled"),
            Self::Failed => write!(f, "Move failed (see job log)"),
        }
    }
}

/// Entry point for folder moves.
///
/// Creates the job, scopes the progress context to the whole operation,
/// delegates to the tree walker, and interprets the terminal outcome.
/// This is the only layer where a cancellation stops propagating and the
/// only layer that writes failure status.
#[derive(Clone)]
pub struct MoveOrchestrator {
    lifecycle: JobLifecycle,
    walker: TreeWalker,
    progress: Arc<dyn ProgressSink>,
}

impl MoveOrchestrator {
    /// Wire an orchestrator from its collaborators.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        jobs: Arc<dyn JobStore>,
        folders: Arc<dyn FolderStore>,
        files: Arc<dyn FileStore>,
        transfer: Arc<dyn AssetstoreTransfer>,
        budget: Arc<dyn TimeBudget>,
        progress: Arc<dyn ProgressSink>,
        config: &TransferConfig,
    ) -> Self {
        let gate = CancellationGate::new(jobs.clone());
        let lifecycle = JobLifecycle::new(jobs);
        let mover = FileMover::new(
            gate.clone(),
            lifecycle.clone(),
            transfer,
            budget,
            Duration::from_secs(config.time_budget_seconds),
        );
        let walker = TreeWalker::new(gate, folders, files, mover);
        Self {
            lifecycle,
            walker,
            progress,
        }
    }

    /// Move every qualifying file under `folder` into `target`.
    ///
    /// Returns `Err` only when the move job itself cannot be created or
    /// started; once the job exists, every failure is recorded in its
    /// log and surfaces as [`MoveOutcome::Failed`].
    pub async fn move_folder(
        &self,
        user: &User,
        folder: &Folder,
        target: &Assetstore,
        ignore_imported: bool,
        progress_enabled: bool,
    ) -> AppResult<MoveOutcome> {
        let (_, outcome) = self
            .move_folder_tracked(user, folder, target, ignore_imported, progress_enabled)
            .await?;
        Ok(outcome)
    }

    /// Like [`Self::move_folder`], but also returns the id of the move
    /// job, for callers that report on it.
    pub async fn move_folder_tracked(
        &self,
        user: &User,
        folder: &Folder,
        target: &Assetstore,
        ignore_imported: bool,
        progress_enabled: bool,
    ) -> AppResult<(Uuid, MoveOutcome)> {
        let job = self
            .lifecycle
            .start(user, folder, target, ignore_imported)
            .await?;

        // The context is finalized by Drop on every exit path below.
        let progress = ProgressContext::open(
            self.progress.clone(),
            progress_enabled,
            &format!(
                "Moving folder \"{}\" ({}) to assetstore \"{}\" ({})",
                folder.name, folder.id, target.name, target.id
            ),
        );

        match self
            .walker
            .walk(folder, user, target, ignore_imported, &progress, job.id)
            .await
        {
            Ok(WalkOutcome::Completed(receipts)) => {
                if let Err(e) = self.lifecycle.succeed(job.id).await {
                    self.record_failure(job.id, &e).await;
                    return Ok((job.id, MoveOutcome::Failed));
                }
                tracing::info!(
                    job_id = %job.id,
                    moved = receipts.len(),
                    "Folder move finished"
                );
                Ok((job.id, MoveOutcome::Completed(receipts)))
            }
            Ok(WalkOutcome::Cancelled) => {
                // Canceled jobs get no further log writes.
                tracing::info!(job_id = %job.id, "Folder move canceled");
                Ok((job.id, MoveOutcome::Cancelled))
            }
            Err(e) => {
                self.record_failure(job.id, &e).await;
                Ok((job.id, MoveOutcome::Failed))
            }
        }
    }

    /// Record a failure in the job log and status.
    async fn record_failure(&self, job_id: Uuid, error: &AppError) {
        tracing::warn!(%job_id, %error, "Folder move failed");
        if let Err(log_error) = self.lifecycle.fail(job_id, &error.to_string()).await {
            tracing::error!(
                %job_id,
                %log_error,
                "Failed to record move failure on the job"
            );
        }
    }
}

impl std::fmt::Debug for MoveOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveOrchestrator").finish()
    }
}
