//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Methods that write more
//! than one statement run inside a single transaction; dropping the
//! transaction on an early return rolls it back.

pub mod category_repo;
pub mod project_repo;
pub mod version_repo;

pub use category_repo::CategoryRepo;
pub use project_repo::ProjectRepo;
pub use version_repo::VersionRepo;
