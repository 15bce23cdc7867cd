//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs. Server-assigned columns
//!   (ids, timestamps, `sort_order`, `version_num`) never appear in them.

pub mod category;
pub mod project;
pub mod version;
