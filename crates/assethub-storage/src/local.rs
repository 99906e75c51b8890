//! Filesystem-to-filesystem transfer backend.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_entity::assetstore::{
    Assetstore, AssetstoreKind, AssetstoreStore, AssetstoreTransfer, MoveReceipt,
};
use assethub_entity::file::{File, FileStore};
use assethub_entity::user::User;

/// Moves file bytes between filesystem-backed assetstores.
///
/// The sequence is copy, reassign, then best-effort removal of the
/// source bytes. The reassignment is the commit point: a crash before
/// it leaves the file untouched in its source store, a crash after it
/// leaves at worst an orphaned source copy.
pub struct LocalAssetstoreTransfer {
    assetstores: Arc<dyn AssetstoreStore>,
    files: Arc<dyn FileStore>,
}

impl LocalAssetstoreTransfer {
    /// Create a new local transfer backend.
    pub fn new(assetstores: Arc<dyn AssetstoreStore>, files: Arc<dyn FileStore>) -> Self {
        Self { assetstores, files }
    }

    /// Resolve a file's absolute path within an assetstore root.
    fn resolve(store: &Assetstore, storage_path: &str) -> PathBuf {
        Path::new(&store.root).join(storage_path.trim_start_matches('/'))
    }

    fn require_filesystem(store: &Assetstore) -> AppResult<()> {
        if store.kind != AssetstoreKind::Filesystem {
            return Err(AppError::transfer(format!(
                "Assetstore \"{}\" ({}) is not filesystem-backed",
                store.name, store.id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl AssetstoreTransfer for LocalAssetstoreTransfer {
    async fn move_file(
        &self,
        file: &File,
        _user: &User,
        target: &Assetstore,
    ) -> AppResult<MoveReceipt> {
        let source = self
            .assetstores
            .find_by_id(file.assetstore_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Assetstore {} not found", file.assetstore_id))
            })?;

        Self::require_filesystem(&source)?;
        Self::require_filesystem(target)?;

        let source_path = Self::resolve(&source, &file.storage_path);
        // Files keep their relative layout across stores.
        let target_rel = file.storage_path.trim_start_matches('/').to_string();
        let target_path = Self::resolve(target, &target_rel);

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Transfer,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let bytes_moved = fs::copy(&source_path, &target_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Transfer,
                format!(
                    "Failed to copy {} -> {}",
                    source_path.display(),
                    target_path.display()
                ),
                e,
            )
        })?;

        let updated = self
            .files
            .reassign(file.id, target.id, &target_rel)
            .await?;

        // The record already points at the target; a stale source copy
        // is recoverable garbage, so removal failure is only a warning.
        if let Err(e) = fs::remove_file(&source_path).await {
            warn!(
                file_id = %file.id,
                path = %source_path.display(),
                error = %e,
                "Failed to remove source bytes after move"
            );
        }

        debug!(
            file_id = %file.id,
            source = %source.id,
            target = %target.id,
            bytes = bytes_moved,
            "Moved file bytes"
        );

        Ok(MoveReceipt {
            file_id: updated.id,
            file_name: updated.name,
            source_assetstore_id: source.id,
            target_assetstore_id: target.id,
            bytes_moved: bytes_moved as i64,
            storage_path: updated.storage_path,
            moved_at: chrono::Utc::now(),
        })
    }
}
