//! Request handlers for the tracked entities.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `trackboard_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod link;
pub mod link_type;
pub mod project;
pub mod task;
