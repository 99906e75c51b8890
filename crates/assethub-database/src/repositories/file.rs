//! File repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_entity::file::{File, FileStore, MoveFilter};

/// Repository for file records.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a file by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn find_attached(
        &self,
        attached_to_id: Uuid,
        filter: &MoveFilter,
    ) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files \
             WHERE attached_to_id = $1 \
               AND assetstore_id <> $2 \
               AND (NOT $3 OR NOT imported) \
             ORDER BY name ASC",
        )
        .bind(attached_to_id)
        .bind(filter.target_assetstore_id)
        .bind(filter.ignore_imported)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list attached files", e))
    }

    async fn find_owned(&self, item_id: Uuid, filter: &MoveFilter) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files \
             WHERE item_id = $1 \
               AND assetstore_id <> $2 \
               AND (NOT $3 OR NOT imported) \
             ORDER BY name ASC",
        )
        .bind(item_id)
        .bind(filter.target_assetstore_id)
        .bind(filter.ignore_imported)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list owned files", e))
    }

    async fn reassign(
        &self,
        file_id: Uuid,
        assetstore_id: Uuid,
        storage_path: &str,
    ) -> AppResult<File> {
        // Single statement, so no reader observes a half-moved reference.
        sqlx::query_as::<_, File>(
            "UPDATE files SET assetstore_id = $2, storage_path = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(file_id)
        .bind(assetstore_id)
        .bind(storage_path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reassign file", e))?
        .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))
    }
}
