//! Route definitions for the `/projects` resource.
//!
//! Also exposes the per-project task and link listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::{link, project, task};
use crate::state::AppState;

/// Routes for `/projects`.
///
/// ```text
/// GET    /projects/                   -> list
/// POST   /projects/                   -> create
/// GET    /projects/status/{status}    -> list_by_status
/// GET    /projects/{id}               -> get_by_id
/// PUT    /projects/{id}               -> update
/// DELETE /projects/{id}               -> delete
/// GET    /projects/{id}/tasks         -> task::list_by_project
/// GET    /projects/{id}/links         -> link::list_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route("/projects/", get(project::list).post(project::create))
        .route("/projects/status/{status}", get(project::list_by_status))
        .route(
            "/projects/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/projects/{id}/tasks", get(task::list_by_project))
        .route("/projects/{id}/links", get(link::list_by_project))
}
