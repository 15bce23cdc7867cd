//! Handlers for versions nested under `/projects/{id}/versions`.

use axum::extract::State;
use axum::Json;
use promptbox_core::error::CoreError;
use promptbox_db::models::version::{CreateVersion, Version};
use promptbox_db::repositories::VersionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/projects/{id}/versions
pub async fn create(
    State(state): State<AppState>,
    IdPath(project_id): IdPath,
    ValidatedJson(input): ValidatedJson<CreateVersion>,
) -> AppResult<Json<Version>> {
    let version = VersionRepo::create(&state.pool, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    tracing::info!(
        project_id,
        version_num = version.version_num,
        "Version created"
    );
    Ok(Json(version))
}

/// GET /api/projects/{id}/versions
///
/// Newest first. An unknown project yields an empty list.
pub async fn list_by_project(
    State(state): State<AppState>,
    IdPath(project_id): IdPath,
) -> AppResult<Json<Vec<Version>>> {
    let versions = VersionRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(versions))
}
