//! Handlers for the `/projects` resource.
//!
//! Every project response embeds the project's tasks and links.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use trackboard_core::error::CoreError;
use trackboard_core::types::DbId;
use trackboard_core::validation::validate_input;
use trackboard_db::models::project::{CreateProject, ProjectWithChildren, UpdateProject};
use trackboard_db::models::status::ProjectStatusFilter;
use trackboard_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /projects/
///
/// The new project is always `Active`; a missing description becomes `""`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectWithChildren>)> {
    validate_input(&input)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");

    let detail = find_detail(&state, project.id).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /projects/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithChildren>>> {
    let projects = ProjectRepo::list_with_children(&state.pool, None).await?;
    Ok(Json(projects))
}

/// GET /projects/status/{status}
///
/// `All` returns every project; other values match the stored status exactly.
pub async fn list_by_status(
    State(state): State<AppState>,
    Path(filter): Path<ProjectStatusFilter>,
) -> AppResult<Json<Vec<ProjectWithChildren>>> {
    let projects = ProjectRepo::list_with_children(&state.pool, filter.status()).await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithChildren>> {
    let detail = find_detail(&state, id).await?;
    Ok(Json(detail))
}

/// PUT /projects/{id}
///
/// Overwrites title and description. Status cannot be changed here.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectWithChildren>> {
    ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let detail = find_detail(&state, id).await?;
    Ok(Json(detail))
}

/// DELETE /projects/{id}
///
/// Removes the project together with all of its tasks and links.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted with its tasks and links");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

async fn find_detail(state: &AppState, id: DbId) -> AppResult<ProjectWithChildren> {
    ProjectRepo::find_with_children(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}
