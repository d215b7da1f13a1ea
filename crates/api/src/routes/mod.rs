pub mod health;
pub mod link;
pub mod link_type;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree.
///
/// Route hierarchy (collection routes also answer without the trailing slash):
///
/// ```text
/// /projects/                          list, create
/// /projects/status/{status}           list by status (All, Active, Archived, Completed)
/// /projects/{id}                      get, update, delete
/// /projects/{id}/tasks                tasks of a project
/// /projects/{id}/links                links of a project
///
/// /tasks/                             list, create
/// /tasks/{id}                         get, update, delete
///
/// /links/                             list, create
/// /links/{id}                         get, update (partial), delete
///
/// /link_types/                        list, create (multipart)
/// /link_types/{id}                    get, update (multipart), delete
/// /link_types/icon/{id}/{theme}       icon bytes (light, dark)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(task::router())
        .merge(link::router())
        .merge(link_type::router())
}
