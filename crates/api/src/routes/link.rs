//! Route definitions for the `/links` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::link;
use crate::state::AppState;

/// Routes for `/links`.
///
/// ```text
/// GET    /links/         -> list
/// POST   /links/         -> create
/// GET    /links/{id}     -> get_by_id
/// PUT    /links/{id}     -> update
/// DELETE /links/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/links", get(link::list).post(link::create))
        .route("/links/", get(link::list).post(link::create))
        .route(
            "/links/{id}",
            get(link::get_by_id).put(link::update).delete(link::delete),
        )
}
