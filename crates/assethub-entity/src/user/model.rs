//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The principal on whose behalf a move runs.
///
/// Threaded through the traversal so child-folder enumeration can be
/// permission-filtered; the engine itself makes no access decisions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Whether the user has administrative rights.
    pub is_admin: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
