//! User store contract.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_core::result::AppResult;

use super::model::User;

/// Read access to user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}
