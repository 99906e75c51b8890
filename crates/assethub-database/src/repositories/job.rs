//! Job repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_entity::job::{CreateJob, Job, JobStatus, JobStore, JobUpdate};

/// Repository for background job records.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    /// Mark a job as canceled.
    ///
    /// This is the external actor's side of the cancellation protocol;
    /// the move engine only ever observes the status, it never sets it.
    pub async fn cancel(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET status = 'canceled', updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to cancel job", e))
    }
}

#[async_trait]
impl JobStore for JobRepository {
    async fn create(&self, job: CreateJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (job_type, title, payload, created_by) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&job.job_type)
        .bind(&job.title)
        .bind(&job.payload)
        .bind(job.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    async fn reload(&self, id: Uuid) -> AppResult<Job> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))
    }

    async fn update(&self, id: Uuid, update: JobUpdate) -> AppResult<Job> {
        // array_append keeps the log strictly append-only; a NULL log
        // line or status leaves the column untouched.
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET \
                 log = CASE WHEN $2::text IS NULL THEN log ELSE array_append(log, $2) END, \
                 status = COALESCE($3, status), \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(update.log)
        .bind(update.status as Option<JobStatus>)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job", e))?
        .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))
    }
}
