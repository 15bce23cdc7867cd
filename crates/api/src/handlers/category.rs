//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::Json;
use promptbox_core::error::CoreError;
use promptbox_db::models::category::{Category, CreateCategory, ReorderItem, UpdateCategory};
use promptbox_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody, ValidatedJson};
use crate::response::OkResponse;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/categories
///
/// The new category is appended to the end of the display order.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::create(&state.pool, &input)
        .await
        .map_err(|e| duplicate_name(e, &input.name))?;

    tracing::info!(
        category_id = category.id,
        sort_order = category.sort_order,
        "Category created"
    );
    Ok(Json(category))
}

/// PUT /api/categories/reorder
///
/// Unknown ids in the payload are ignored.
pub async fn reorder(
    State(state): State<AppState>,
    JsonBody(items): JsonBody<Vec<ReorderItem>>,
) -> AppResult<Json<OkResponse>> {
    let updated = CategoryRepo::reorder(&state.pool, &items).await?;
    tracing::info!(requested = items.len(), updated, "Categories reordered");
    Ok(Json(OkResponse::ok()))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| duplicate_name(e, &input.name))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// Projects in the category are kept and become uncategorized.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<OkResponse>> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, "Category deleted");
    Ok(Json(OkResponse::ok()))
}

/// Name the offending category when the unique name constraint fires.
fn duplicate_name(err: sqlx::Error, name: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::Core(CoreError::Conflict(format!(
                "Category '{name}' already exists"
            )));
        }
    }
    AppError::Database(err)
}
