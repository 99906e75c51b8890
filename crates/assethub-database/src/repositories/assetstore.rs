//! Assetstore repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_entity::assetstore::{Assetstore, AssetstoreStore};

/// Repository for assetstore records.
#[derive(Debug, Clone)]
pub struct AssetstoreRepository {
    pool: PgPool,
}

impl AssetstoreRepository {
    /// Create a new assetstore repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all assetstores by name.
    pub async fn find_all(&self) -> AppResult<Vec<Assetstore>> {
        sqlx::query_as::<_, Assetstore>("SELECT * FROM assetstores ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assetstores", e))
    }
}

#[async_trait]
impl AssetstoreStore for AssetstoreRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Assetstore>> {
        sqlx::query_as::<_, Assetstore>("SELECT * FROM assetstores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find assetstore", e))
    }

    async fn find_current(&self) -> AppResult<Option<Assetstore>> {
        sqlx::query_as::<_, Assetstore>("SELECT * FROM assetstores WHERE current LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find current assetstore", e)
            })
    }
}
