//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A file record — the unit of migration.
///
/// A file belongs to exactly one assetstore at any instant. A successful
/// move replaces `assetstore_id` and `storage_path` in a single
/// statement, so no reader observes a half-moved reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: Uuid,
    /// The file name (including extension).
    pub name: String,
    /// The assetstore currently holding the file bytes.
    pub assetstore_id: Uuid,
    /// The item that owns this file, if any.
    pub item_id: Option<Uuid>,
    /// The object (item or folder) this file is attached to, if any.
    ///
    /// Attachment is a separate relation from ownership.
    pub attached_to_id: Option<Uuid>,
    /// True if the file was ingested by reference from an external
    /// location, without a physical copy step.
    pub imported: bool,
    /// File size in bytes.
    pub size_bytes: i64,
    /// The path within the assetstore.
    pub storage_path: String,
    /// MIME type of the file.
    pub mime_type: Option<String>,
    /// When the file record was created.
    pub created_at: DateTime<Utc>,
    /// When the file record was last updated.
    pub updated_at: DateTime<Utc>,
}
