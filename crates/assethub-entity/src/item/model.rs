//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A logical grouping of files owned by a folder.
///
/// An item may own files (via `files.item_id`) and may separately have
/// files attached to it (via `files.attached_to_id`); ownership and
/// attachment are distinct relations. At most one item per folder
/// carries `is_metadata = true` and represents the folder itself.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: Uuid,
    /// The folder that owns this item.
    pub folder_id: Uuid,
    /// Item name.
    pub name: String,
    /// Whether this item is the folder's metadata item.
    pub is_metadata: bool,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}
