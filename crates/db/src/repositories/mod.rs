//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod link_repo;
pub mod link_type_repo;
pub mod project_repo;
pub mod task_repo;

pub use link_repo::LinkRepo;
pub use link_type_repo::LinkTypeRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;

/// `?, ?, ...` placeholder list for an `IN (...)` clause with `n` values.
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
