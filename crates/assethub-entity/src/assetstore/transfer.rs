//! The byte-level transfer primitive contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assethub_core::result::AppResult;

use super::model::Assetstore;
use crate::file::model::File;
use crate::user::model::User;

/// The result record of one file relocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveReceipt {
    /// The file that was moved.
    pub file_id: Uuid,
    /// The file name at the time of the move.
    pub file_name: String,
    /// The assetstore the bytes came from.
    pub source_assetstore_id: Uuid,
    /// The assetstore the bytes now live in.
    pub target_assetstore_id: Uuid,
    /// Number of bytes relocated.
    pub bytes_moved: i64,
    /// The file's new path within the target assetstore.
    pub storage_path: String,
    /// When the move completed.
    pub moved_at: DateTime<Utc>,
}

/// Relocates one file's bytes into a target assetstore.
///
/// This is the only seam that touches actual data movement. The engine
/// treats it as a black box returning a descriptor of the new location
/// or a transfer error; it performs no retry or rollback around it.
#[async_trait]
pub trait AssetstoreTransfer: Send + Sync {
    /// Move `file` into `target`, returning a receipt for the new
    /// location.
    async fn move_file(&self, file: &File, user: &User, target: &Assetstore)
    -> AppResult<MoveReceipt>;
}
