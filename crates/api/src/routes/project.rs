//! Route definitions for the `/projects` resource.
//!
//! Also nests version routes under `/projects/{id}/versions`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, version};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// POST   /{id}/favorite     -> toggle_favorite
///
/// GET    /{id}/versions     -> version::list_by_project
/// POST   /{id}/versions     -> version::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/favorite", post(project::toggle_favorite))
        .route(
            "/{id}/versions",
            get(version::list_by_project).post(version::create),
        )
}
