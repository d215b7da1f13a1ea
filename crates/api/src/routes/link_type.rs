//! Route definitions for the `/link_types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::link_type;
use crate::state::AppState;

/// Routes for `/link_types`.
///
/// ```text
/// GET    /link_types/                     -> list
/// POST   /link_types/                     -> create
/// GET    /link_types/{id}                 -> get_by_id
/// PUT    /link_types/{id}                 -> update
/// DELETE /link_types/{id}                 -> delete
/// GET    /link_types/icon/{id}/{theme}    -> get_icon
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/link_types", get(link_type::list).post(link_type::create))
        .route("/link_types/", get(link_type::list).post(link_type::create))
        .route(
            "/link_types/{id}",
            get(link_type::get_by_id)
                .put(link_type::update)
                .delete(link_type::delete),
        )
        .route("/link_types/icon/{id}/{theme}", get(link_type::get_icon))
}
