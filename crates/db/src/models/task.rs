//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackboard_core::types::DbId;
use validator::Validate;

use crate::models::status::TaskStatus;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub project_id: DbId,
}

/// DTO for creating a new task.
///
/// `project_id` is not checked up front; the foreign key is the only guard.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub project_id: DbId,
}

/// DTO for updating a task.
///
/// Unlike links, every field is written unconditionally, including empty
/// or missing values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
}
