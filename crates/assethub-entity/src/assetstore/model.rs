//! Assetstore entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The kind of backend an assetstore stores bytes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "assetstore_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetstoreKind {
    /// Local filesystem directory.
    Filesystem,
    /// S3-compatible object storage.
    S3,
}

impl AssetstoreKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filesystem => "filesystem",
            Self::S3 => "s3",
        }
    }
}

impl std::fmt::Display for AssetstoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A storage backend holding physical file bytes.
///
/// Files reference exactly one assetstore at a time; the move engine
/// treats the store itself as opaque and only ever hands it to the
/// transfer primitive.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assetstore {
    /// Unique assetstore identifier.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Backend kind.
    pub kind: AssetstoreKind,
    /// Root path (filesystem directory or bucket prefix).
    pub root: String,
    /// Whether new uploads default to this assetstore.
    pub current: bool,
    /// When the assetstore was created.
    pub created_at: DateTime<Utc>,
    /// When the assetstore was last updated.
    pub updated_at: DateTime<Utc>,
}
