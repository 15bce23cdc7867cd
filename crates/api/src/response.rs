//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "ok": true }` acknowledgement returned by reorder and delete
/// endpoints, which have no entity to echo back.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}
