pub mod category;
pub mod health;
pub mod project;
pub mod spa;

use axum::extract::OriginalUri;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                         service + database health
///
/// /categories                     list, create
/// /categories/reorder             bulk reorder (PUT)
/// /categories/{id}                update, delete
///
/// /projects                       list (?category_id, search, is_favorite), create
/// /projects/{id}                  get, update, delete
/// /projects/{id}/favorite         toggle favorite (POST)
/// /projects/{id}/versions         list, create
/// ```
///
/// Unmatched paths under `/api` get a JSON 404 instead of the web client.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/categories", category::router())
        .nest("/projects", project::router())
        .fallback(api_not_found)
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NoRoute(uri.path().to_string())
}
