//! Single-file mover.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use assethub_core::result::AppResult;
use assethub_core::traits::{ProgressContext, TimeBudget};
use assethub_entity::assetstore::{Assetstore, AssetstoreTransfer, MoveReceipt};
use assethub_entity::file::File;
use assethub_entity::folder::Folder;
use assethub_entity::user::User;

use crate::gate::{CancellationGate, Gate};
use crate::lifecycle::JobLifecycle;

/// Outcome of one file-move attempt.
#[derive(Debug, Clone)]
pub enum MoveStep {
    /// The file was relocated.
    Moved(MoveReceipt),
    /// Cancellation was observed before the transfer started.
    Cancelled,
}

/// Performs one file's relocation, logging it and reporting progress.
///
/// This is the only component that reaches the transfer primitive; it
/// treats the primitive as a black box and adds no retry around it.
#[derive(Clone)]
pub struct FileMover {
    gate: CancellationGate,
    lifecycle: JobLifecycle,
    transfer: Arc<dyn AssetstoreTransfer>,
    budget: Arc<dyn TimeBudget>,
    time_budget: Duration,
}

impl FileMover {
    /// Create a mover.
    ///
    /// `time_budget` is the processing window granted per transfer; a
    /// move may run far longer than an ordinary request-scoped timeout.
    pub fn new(
        gate: CancellationGate,
        lifecycle: JobLifecycle,
        transfer: Arc<dyn AssetstoreTransfer>,
        budget: Arc<dyn TimeBudget>,
        time_budget: Duration,
    ) -> Self {
        Self {
            gate,
            lifecycle,
            transfer,
            budget,
            time_budget,
        }
    }

    /// Move one file into `target`.
    ///
    /// Logs `Moving {folder}/{file}` to the job and mirrors the same
    /// text to the progress context before delegating the byte-level
    /// relocation.
    pub async fn move_file(
        &self,
        file: &File,
        folder: &Folder,
        user: &User,
        target: &Assetstore,
        progress: &ProgressContext,
        job_id: Uuid,
    ) -> AppResult<MoveStep> {
        if let Gate::Cancelled = self.gate.check(job_id).await? {
            return Ok(MoveStep::Cancelled);
        }

        let message = format!("Moving {}/{}", folder.name, file.name);
        self.lifecycle.append(job_id, &message).await?;
        progress.update(&message);

        self.budget.extend(self.time_budget);

        let receipt = self.transfer.move_file(file, user, target).await?;
        tracing::debug!(
            file_id = %file.id,
            bytes = receipt.bytes_moved,
            target = %target.id,
            "File moved"
        );
        Ok(MoveStep::Moved(receipt))
    }
}

impl std::fmt::Debug for FileMover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileMover")
            .field("time_budget", &self.time_budget)
            .finish()
    }
}
