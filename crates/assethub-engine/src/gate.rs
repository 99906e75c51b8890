//! Cancellation gate.

use std::sync::Arc;

use uuid::Uuid;

use assethub_core::result::AppResult;
use assethub_entity::job::JobStore;

/// The gate's verdict for one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// The job is still live; keep going.
    Proceed,
    /// The job was canceled by an external actor; unwind.
    Cancelled,
}

/// Detects external cancellation of a running move.
///
/// Cancellation is requested concurrently with the traversal, so every
/// check reloads the job from the authoritative store — a cached status
/// can never be trusted. The walker consults the gate before descending
/// into a folder and the mover before each file.
#[derive(Clone)]
pub struct CancellationGate {
    jobs: Arc<dyn JobStore>,
}

impl CancellationGate {
    /// Create a gate over the given job store.
    pub fn new(jobs: Arc<dyn JobStore>) -> Self {
        Self { jobs }
    }

    /// Reload the job and report whether it has been canceled.
    pub async fn check(&self, job_id: Uuid) -> AppResult<Gate> {
        let job = self.jobs.reload(job_id).await?;
        if job.is_canceled() {
            tracing::debug!(%job_id, "Cancellation observed");
            Ok(Gate::Cancelled)
        } else {
            Ok(Gate::Proceed)
        }
    }
}

impl std::fmt::Debug for CancellationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationGate").finish()
    }
}
