//! Repository for the `projects` table.

use promptbox_core::timestamp;
use promptbox_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use crate::models::project::{CreateProject, Project, ProjectListParams, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, tags, category_id, is_favorite, created_at, updated_at";

/// Provides CRUD, filtering and favorite operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to the current time.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let now = timestamp::to_db_text(&timestamp::now());
        let query = format!(
            "INSERT INTO projects
                (name, description, tags, category_id, is_favorite, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(Json(&input.tags))
            .bind(input.category_id)
            .bind(input.is_favorite)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects, most recently updated first.
    ///
    /// Filters in `params` combine with AND. `search` is a case-sensitive
    /// substring match against the name OR the description.
    pub async fn list(
        pool: &SqlitePool,
        params: &ProjectListParams,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM projects WHERE 1 = 1"));

        if let Some(category_id) = params.category_id {
            builder.push(" AND category_id = ").push_bind(category_id);
        }
        if let Some(is_favorite) = params.is_favorite {
            builder.push(" AND is_favorite = ").push_bind(is_favorite);
        }
        if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
            // instr() is case-sensitive, unlike LIKE.
            builder
                .push(" AND (instr(name, ")
                .push_bind(search)
                .push(") > 0 OR instr(COALESCE(description, ''), ")
                .push_bind(search)
                .push(") > 0)");
        }

        builder.push(" ORDER BY updated_at DESC, id DESC");
        builder.build_query_as::<Project>().fetch_all(pool).await
    }

    /// Replace a project's name, description, tags and category.
    /// `is_favorite` is kept; `updated_at` is bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if Self::touch(&mut *tx, id).await?.is_none() {
            return Ok(None);
        }

        let query = format!(
            "UPDATE projects SET
                name = $2,
                description = $3,
                tags = $4,
                category_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(Json(&input.tags))
            .bind(input.category_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(project))
    }

    /// Flip `is_favorite` and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn toggle_favorite(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if Self::touch(&mut *tx, id).await?.is_none() {
            return Ok(None);
        }

        let query = format!(
            "UPDATE projects SET is_favorite = NOT is_favorite WHERE id = $1 RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(project))
    }

    /// Delete a project together with all of its versions.
    ///
    /// Returns `true` if the project existed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let versions = sqlx::query("DELETE FROM versions WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(project_id = id, versions, "Project deleted");
        Ok(true)
    }

    /// Set `updated_at` to the next timestamp after its current value.
    ///
    /// Runs on the caller's transaction. The first statement is a write so
    /// the transaction holds SQLite's write lock before reading the old
    /// value. Returns the new timestamp, or `None` if the project does not
    /// exist.
    pub(crate) async fn touch(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        let previous: Option<Timestamp> = sqlx::query_scalar(
            "UPDATE projects SET updated_at = updated_at WHERE id = $1 RETURNING updated_at",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(previous) = previous else {
            return Ok(None);
        };

        let next = timestamp::bump(previous);
        sqlx::query("UPDATE projects SET updated_at = $2 WHERE id = $1")
            .bind(id)
            .bind(timestamp::to_db_text(&next))
            .execute(&mut *conn)
            .await?;

        Ok(Some(next))
    }
}
