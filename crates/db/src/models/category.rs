//! Category entity model and DTOs.

use promptbox_core::category::default_color;
use promptbox_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub icon: Option<String>,
    pub sort_order: i64,
}

/// DTO for creating a category. `sort_order` is assigned by the server.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    /// Defaults to `"blue"` if omitted.
    #[serde(default = "default_color")]
    #[validate(length(min = 1, max = 32, message = "must be 1-32 characters"))]
    pub color: String,
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub icon: Option<String>,
}

/// DTO for replacing a category's name, color and icon. `sort_order` is
/// only changed through [`ReorderItem`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub name: String,
    #[serde(default = "default_color")]
    #[validate(length(min = 1, max = 32, message = "must be 1-32 characters"))]
    pub color: String,
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub icon: Option<String>,
}

/// One entry of a bulk reorder request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReorderItem {
    pub id: DbId,
    pub sort_order: i64,
}
