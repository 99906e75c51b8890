//! File store contract.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_core::result::AppResult;

use super::filter::MoveFilter;
use super::model::File;

/// Read and reassign access to file records.
///
/// The find methods apply the [`MoveFilter`] at the store, so files
/// already in the target assetstore are never surfaced to the engine —
/// they are neither counted nor logged. Results are in name order.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Find qualifying files attached to the given object.
    async fn find_attached(&self, attached_to_id: Uuid, filter: &MoveFilter)
    -> AppResult<Vec<File>>;

    /// Find qualifying files owned by the given item.
    async fn find_owned(&self, item_id: Uuid, filter: &MoveFilter) -> AppResult<Vec<File>>;

    /// Atomically repoint a file at a new assetstore and storage path.
    ///
    /// Implementations must make the swap in a single operation so that
    /// no reader observes an ambiguous or half-moved reference. Returns
    /// the updated record.
    async fn reassign(
        &self,
        file_id: Uuid,
        assetstore_id: Uuid,
        storage_path: &str,
    ) -> AppResult<File>;
}
