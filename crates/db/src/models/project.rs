//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackboard_core::types::DbId;
use validator::Validate;

use crate::models::link::LinkWithType;
use crate::models::status::ProjectStatus;
use crate::models::task::Task;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
}

/// A project together with everything it owns.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithChildren {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<Task>,
    pub links: Vec<LinkWithType>,
}

/// DTO for creating a new project.
///
/// Status is not accepted: every new project starts `Active`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Defaults to an empty string if omitted.
    pub description: Option<String>,
}

/// DTO for updating a project. Both fields are overwritten; status is not
/// updatable here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
}
