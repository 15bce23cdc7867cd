//! Project entity model and DTOs.

use std::fmt;
use std::str::FromStr;

use promptbox_core::types::{DbId, Timestamp};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Stored as a JSON array; serialized as a plain array.
    pub tags: Json<Vec<String>>,
    pub category_id: Option<DbId>,
    pub is_favorite: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// DTO for updating a project. This is a full replace: omitted optional
/// fields are cleared. `is_favorite` is changed only by the toggle endpoint.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category_id: Option<DbId>,
}

/// Query parameters for `GET /api/projects`. All filters are optional and
/// combine with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category_id: Option<DbId>,
    /// Case-sensitive substring matched against name OR description.
    /// An empty string means no search.
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub is_favorite: Option<bool>,
}

/// Treat `?key=` the same as an absent key. Browsers send empty form
/// values for cleared filter inputs.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
