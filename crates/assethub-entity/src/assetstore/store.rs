//! Assetstore store contract.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_core::result::AppResult;

use super::model::Assetstore;

/// Read access to assetstore records.
#[async_trait]
pub trait AssetstoreStore: Send + Sync {
    /// Find an assetstore by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Assetstore>>;

    /// Find the assetstore new uploads currently default to.
    async fn find_current(&self) -> AppResult<Option<Assetstore>>;
}
