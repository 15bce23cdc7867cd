//! Repository for the `categories` table.

use promptbox_core::category::DEFAULT_CATEGORIES;
use promptbox_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::category::{Category, CreateCategory, ReorderItem, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, icon, sort_order";

/// Provides CRUD and ordering operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category at the end of the display order, returning the
    /// created row.
    ///
    /// `sort_order` is one more than the current maximum (1 for the first
    /// category). A duplicate name fails with a unique violation.
    pub async fn create(pool: &SqlitePool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, color, icon, sort_order)
             VALUES ($1, $2, $3, (SELECT COALESCE(MAX(sort_order), 0) + 1 FROM categories))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories in display order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Replace a category's name, color and icon. `sort_order` is kept.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $2, color = $3, icon = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .bind(&input.icon)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite `sort_order` for each listed category in one transaction.
    ///
    /// Unknown ids are skipped. Returns the number of categories updated.
    pub async fn reorder(pool: &SqlitePool, items: &[ReorderItem]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut updated = 0;

        for item in items {
            let result = sqlx::query("UPDATE categories SET sort_order = $1 WHERE id = $2")
                .bind(item.sort_order)
                .bind(item.id)
                .execute(&mut *tx)
                .await?;
            updated += result.rows_affected();
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a category after detaching its projects.
    ///
    /// Projects in the category get `category_id = NULL`; none are deleted.
    /// Both steps commit together. Returns `true` if the category existed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let detached = sqlx::query("UPDATE projects SET category_id = NULL WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(category_id = id, detached, "Category deleted");
        Ok(true)
    }

    /// Insert [`DEFAULT_CATEGORIES`] if the table is empty.
    ///
    /// Returns the number of categories inserted (0 when any category
    /// already exists).
    pub async fn seed_defaults_if_empty(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for (position, seed) in DEFAULT_CATEGORIES.iter().enumerate() {
            let result =
                sqlx::query("INSERT INTO categories (name, color, sort_order) VALUES ($1, $2, $3)")
                    .bind(seed.name)
                    .bind(seed.color)
                    .bind(position as i64 + 1)
                    .execute(&mut *tx)
                    .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
