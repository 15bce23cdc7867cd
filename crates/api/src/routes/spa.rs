//! Hosting for the bundled single-page client.
//!
//! Every path outside `/api` is a request for the client: an existing file
//! under the static directory is served as is, anything else gets
//! `index.html` so the client-side router can resolve it.

use std::path::Path;

use axum::Json;
use axum::Router;
use serde_json::{json, Value};
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Notice returned for client paths when no build has been deployed.
pub const NOT_DEPLOYED_MESSAGE: &str =
    "Frontend is not deployed. Build the client and copy its output into the static directory.";

/// Fallback router serving files from `static_dir`.
///
/// Whether the client is deployed is decided once, when the router is
/// built.
pub fn router(static_dir: &Path) -> Router<AppState> {
    let index = static_dir.join("index.html");

    if index.is_file() {
        tracing::info!(path = %static_dir.display(), "Serving web client");
        let files = ServeDir::new(static_dir).fallback(ServeFile::new(index));
        Router::new().fallback_service(files)
    } else {
        tracing::warn!(
            path = %static_dir.display(),
            "No index.html in static directory, web client disabled"
        );
        Router::new().fallback(not_deployed)
    }
}

async fn not_deployed() -> Json<Value> {
    Json(json!({ "message": NOT_DEPLOYED_MESSAGE }))
}
