//! Version entity model and DTOs.

use promptbox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `versions` table. Rows are never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Version {
    pub id: DbId,
    pub project_id: DbId,
    pub version_num: i64,
    pub content: String,
    pub changelog: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for appending a version to a project. The project comes from the
/// URL; `version_num` is assigned by the server.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVersion {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    pub changelog: Option<String>,
}
