//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A folder in the content hierarchy.
///
/// Folders form a rooted tree (no cycles). Each folder has zero-or-one
/// associated metadata item, zero-or-more child folders, and
/// zero-or-more child items; files hang off items, either owned or
/// attached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Parent folder ID (None for root folders).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    pub name: String,
    /// The user who created the folder.
    pub creator_id: Uuid,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
