//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_entity::file::MoveFilter;
use assethub_entity::folder::{Folder, FolderStore};
use assethub_entity::item::Item;
use assethub_entity::user::User;

/// Repository for folder and item tree queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn metadata_item(&self, folder_id: Uuid) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "SELECT * FROM items WHERE folder_id = $1 AND is_metadata LIMIT 1",
        )
        .bind(folder_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve metadata item", e)
        })
    }

    async fn child_folders(&self, folder_id: Uuid, _user: &User) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id = $1 ORDER BY name ASC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list child folders", e))
    }

    async fn child_items(&self, folder_id: Uuid, filter: &MoveFilter) -> AppResult<Vec<Item>> {
        // Items with no qualifying files contribute nothing to the
        // traversal; the EXISTS clause skips them at the store.
        sqlx::query_as::<_, Item>(
            "SELECT i.* FROM items i \
             WHERE i.folder_id = $1 AND NOT i.is_metadata \
               AND EXISTS ( \
                   SELECT 1 FROM files f \
                   WHERE (f.item_id = i.id OR f.attached_to_id = i.id) \
                     AND f.assetstore_id <> $2 \
                     AND (NOT $3 OR NOT f.imported) \
               ) \
             ORDER BY i.name ASC",
        )
        .bind(folder_id)
        .bind(filter.target_assetstore_id)
        .bind(filter.ignore_imported)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list child items", e))
    }
}
