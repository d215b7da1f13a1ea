//! Handlers for the `/links` resource.
//!
//! Link responses embed the full link type.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use trackboard_core::error::CoreError;
use trackboard_core::types::DbId;
use trackboard_core::validation::validate_input;
use trackboard_db::models::link::{CreateLink, LinkWithType, UpdateLink};
use trackboard_db::repositories::LinkRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /links/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLink>,
) -> AppResult<(StatusCode, Json<LinkWithType>)> {
    validate_input(&input)?;
    let link = LinkRepo::create(&state.pool, &input).await?;
    tracing::info!(
        link_id = link.id,
        project_id = link.project_id,
        link_type_id = link.link_type_id,
        "Link created",
    );

    let link = LinkRepo::find_with_type(&state.pool, link.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Link",
            id: link.id,
        }))?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /links/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LinkWithType>>> {
    let links = LinkRepo::list(&state.pool).await?;
    Ok(Json(links))
}

/// GET /projects/{project_id}/links
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<LinkWithType>>> {
    let links = LinkRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(links))
}

/// GET /links/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LinkWithType>> {
    let link = LinkRepo::find_with_type(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Link", id }))?;
    Ok(Json(link))
}

/// PUT /links/{id}
///
/// Partial update: only present, non-empty, non-zero fields are applied.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLink>,
) -> AppResult<Json<LinkWithType>> {
    let link = LinkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Link", id }))?;
    Ok(Json(link))
}

/// DELETE /links/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LinkRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Link", id }))
    }
}
