//! Repository for the `projects` table.

use std::collections::HashMap;

use sqlx::SqlitePool;
use trackboard_core::types::DbId;

use crate::models::link::LinkWithType;
use crate::models::project::{CreateProject, Project, ProjectWithChildren, UpdateProject};
use crate::models::status::ProjectStatus;
use crate::models::task::Task;
use crate::repositories::{LinkRepo, TaskRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, status";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// The description defaults to an empty string and the status is always
    /// `Active`.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, status)
             VALUES (?1, COALESCE(?2, ''), ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(ProjectStatus::Active)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects in creation order, optionally restricted to one status.
    pub async fn list(
        pool: &SqlitePool,
        status: Option<ProjectStatus>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        match status {
            Some(status) => {
                let query =
                    format!("SELECT {COLUMNS} FROM projects WHERE status = ?1 ORDER BY id");
                sqlx::query_as::<_, Project>(&query)
                    .bind(status)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
                sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find a project by ID together with its tasks and links.
    pub async fn find_with_children(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ProjectWithChildren>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let tasks = TaskRepo::list_by_project(pool, project.id).await?;
        let links = LinkRepo::list_by_project(pool, project.id).await?;
        Ok(Some(ProjectWithChildren {
            project,
            tasks,
            links,
        }))
    }

    /// List projects (optionally by status) with their tasks and links.
    ///
    /// Children of the listed projects are loaded with one query per table
    /// and grouped in memory.
    pub async fn list_with_children(
        pool: &SqlitePool,
        status: Option<ProjectStatus>,
    ) -> Result<Vec<ProjectWithChildren>, sqlx::Error> {
        let projects = Self::list(pool, status).await?;
        if projects.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();

        let mut tasks_by_project: HashMap<DbId, Vec<Task>> = HashMap::new();
        for task in TaskRepo::list_by_projects(pool, &ids).await? {
            tasks_by_project.entry(task.project_id).or_default().push(task);
        }

        let mut links_by_project: HashMap<DbId, Vec<LinkWithType>> = HashMap::new();
        for link in LinkRepo::list_by_projects(pool, &ids).await? {
            links_by_project.entry(link.project_id).or_default().push(link);
        }

        Ok(projects
            .into_iter()
            .map(|project| ProjectWithChildren {
                tasks: tasks_by_project.remove(&project.id).unwrap_or_default(),
                links: links_by_project.remove(&project.id).unwrap_or_default(),
                project,
            })
            .collect())
    }

    /// Overwrite title and description. Status is left untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = ?2,
                description = ?3
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project along with all of its tasks and links.
    ///
    /// Returns `true` if the project existed. Nothing is removed otherwise.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        // Already gone via ON DELETE CASCADE when foreign keys are enforced.
        sqlx::query("DELETE FROM tasks WHERE project_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM links WHERE project_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
