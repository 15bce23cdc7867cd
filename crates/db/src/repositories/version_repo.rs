//! Repository for the `versions` table.

use promptbox_core::timestamp;
use promptbox_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::version::{CreateVersion, Version};
use crate::repositories::ProjectRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, version_num, content, changelog, created_at";

/// How many times [`VersionRepo::create`] retries after losing a race for
/// the same `(project_id, version_num)`.
const MAX_CREATE_ATTEMPTS: u32 = 3;

/// Provides append and history operations for project versions.
pub struct VersionRepo;

impl VersionRepo {
    /// Append a version to a project, auto-assigning the next version number
    /// and bumping the project's `updated_at` in the same transaction.
    ///
    /// Returns `None` if the project does not exist.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateVersion,
    ) -> Result<Option<Version>, sqlx::Error> {
        let mut attempt = 1;
        loop {
            match Self::try_create(pool, project_id, input).await {
                Err(sqlx::Error::Database(db_err))
                    if db_err.is_unique_violation() && attempt < MAX_CREATE_ATTEMPTS =>
                {
                    tracing::warn!(project_id, attempt, "Version number conflict, retrying");
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    async fn try_create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateVersion,
    ) -> Result<Option<Version>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if ProjectRepo::touch(&mut *tx, project_id).await?.is_none() {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO versions (project_id, version_num, content, changelog, created_at)
             VALUES (
                $1,
                (SELECT COALESCE(MAX(version_num), 0) + 1 FROM versions WHERE project_id = $1),
                $2, $3, $4
             )
             RETURNING {COLUMNS}"
        );
        let version = sqlx::query_as::<_, Version>(&query)
            .bind(project_id)
            .bind(&input.content)
            .bind(&input.changelog)
            .bind(timestamp::to_db_text(&timestamp::now()))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(version))
    }

    /// List all versions of a project, newest first.
    ///
    /// An unknown `project_id` yields an empty list.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<Version>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM versions
             WHERE project_id = $1
             ORDER BY version_num DESC"
        );
        sqlx::query_as::<_, Version>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Count the versions stored for a project.
    pub async fn count_by_project(pool: &SqlitePool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM versions WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }
}
