//! Folder store contract.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_core::result::AppResult;

use super::model::Folder;
use crate::file::filter::MoveFilter;
use crate::item::model::Item;
use crate::user::model::User;

/// Read access to the folder hierarchy.
///
/// Enumeration order is deterministic (by name) so that traversal order,
/// result order, and log order all agree.
#[async_trait]
pub trait FolderStore: Send + Sync {
    /// Find a folder by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>>;

    /// Resolve the folder's metadata item, if it has one.
    async fn metadata_item(&self, folder_id: Uuid) -> AppResult<Option<Item>>;

    /// Enumerate the folders directly below `folder_id` that `user` may
    /// read, in name order.
    async fn child_folders(&self, folder_id: Uuid, user: &User) -> AppResult<Vec<Folder>>;

    /// Enumerate the non-metadata items directly inside `folder_id`, in
    /// name order.
    ///
    /// Implementations may use `filter` to skip items with no qualifying
    /// files; doing so cannot change the set of files moved.
    async fn child_items(&self, folder_id: Uuid, filter: &MoveFilter) -> AppResult<Vec<Item>>;
}
