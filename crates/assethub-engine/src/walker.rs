//! Depth-first tree walker.

use std::ops::ControlFlow;
use std::sync::Arc;

use uuid::Uuid;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::ProgressContext;
use assethub_entity::assetstore::{Assetstore, MoveReceipt};
use assethub_entity::file::{File, FileStore, MoveFilter};
use assethub_entity::folder::{Folder, FolderStore};
use assethub_entity::user::User;

use crate::gate::{CancellationGate, Gate};
use crate::mover::{FileMover, MoveStep};

/// Outcome of a full tree walk.
#[derive(Debug, Clone)]
pub enum WalkOutcome {
    /// Every qualifying file was moved; receipts are in traversal order.
    Completed(Vec<MoveReceipt>),
    /// Cancellation was observed; receipts accumulated so far are
    /// discarded. Files already moved stay moved.
    Cancelled,
}

/// Walks a folder subtree and moves every qualifying file in it.
///
/// The traversal is depth-first preorder with deterministic (name)
/// order per level, driven by an explicit worklist so pathologically
/// deep trees cannot exhaust the call stack. Within one folder the
/// order is: files attached to the folder's metadata item, then per
/// child item its attached then owned files, then the child folders.
#[derive(Clone)]
pub struct TreeWalker {
    gate: CancellationGate,
    folders: Arc<dyn FolderStore>,
    files: Arc<dyn FileStore>,
    mover: FileMover,
}

impl TreeWalker {
    /// Create a walker.
    pub fn new(
        gate: CancellationGate,
        folders: Arc<dyn FolderStore>,
        files: Arc<dyn FileStore>,
        mover: FileMover,
    ) -> Self {
        Self {
            gate,
            folders,
            files,
            mover,
        }
    }

    /// Move every qualifying file under `root` into `target`.
    ///
    /// Fails with a missing-metadata error if any folder in the subtree
    /// lacks its metadata item; metadata is mandatory, not an empty
    /// result. Cancellation unwinds as [`WalkOutcome::Cancelled`].
    pub async fn walk(
        &self,
        root: &Folder,
        user: &User,
        target: &Assetstore,
        ignore_imported: bool,
        progress: &ProgressContext,
        job_id: Uuid,
    ) -> AppResult<WalkOutcome> {
        let filter = MoveFilter::new(target.id, ignore_imported);
        let mut receipts: Vec<MoveReceipt> = Vec::new();
        // LIFO worklist; children are pushed in reverse so the first
        // child (by name) is processed next.
        let mut pending: Vec<Folder> = vec![root.clone()];

        while let Some(folder) = pending.pop() {
            if let Gate::Cancelled = self.gate.check(job_id).await? {
                return Ok(WalkOutcome::Cancelled);
            }

            let metadata = self.folders.metadata_item(folder.id).await?.ok_or_else(|| {
                AppError::missing_metadata(format!("Folder {} has no metadata item", folder.id))
            })?;

            let attached = self.files.find_attached(metadata.id, &filter).await?;
            if let ControlFlow::Break(()) = self
                .move_batch(&attached, &folder, user, target, progress, job_id, &mut receipts)
                .await?
            {
                return Ok(WalkOutcome::Cancelled);
            }

            for item in self.folders.child_items(folder.id, &filter).await? {
                let attached = self.files.find_attached(item.id, &filter).await?;
                if let ControlFlow::Break(()) = self
                    .move_batch(&attached, &folder, user, target, progress, job_id, &mut receipts)
                    .await?
                {
                    return Ok(WalkOutcome::Cancelled);
                }

                let owned = self.files.find_owned(item.id, &filter).await?;
                if let ControlFlow::Break(()) = self
                    .move_batch(&owned, &folder, user, target, progress, job_id, &mut receipts)
                    .await?
                {
                    return Ok(WalkOutcome::Cancelled);
                }
            }

            let mut children = self.folders.child_folders(folder.id, user).await?;
            children.reverse();
            pending.extend(children);
        }

        Ok(WalkOutcome::Completed(receipts))
    }

    /// Move a batch of qualifying files, appending receipts in order.
    ///
    /// Breaks when cancellation is observed mid-batch.
    #[allow(clippy::too_many_arguments)]
    async fn move_batch(
        &self,
        batch: &[File],
        folder: &Folder,
        user: &User,
        target: &Assetstore,
        progress: &ProgressContext,
        job_id: Uuid,
        receipts: &mut Vec<MoveReceipt>,
    ) -> AppResult<ControlFlow<()>> {
        for file in batch {
            match self
                .mover
                .move_file(file, folder, user, target, progress, job_id)
                .await?
            {
                MoveStep::Moved(receipt) => receipts.push(receipt),
                MoveStep::Cancelled => return Ok(ControlFlow::Break(())),
            }
        }
        Ok(ControlFlow::Continue(()))
    }
}

impl std::fmt::Debug for TreeWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeWalker").finish()
    }
}
