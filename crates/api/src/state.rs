use std::sync::Arc;

use trackboard_core::icons::IconStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the icon store sits
/// behind an `Arc`. Handlers borrow connections from `pool` per request;
/// there is no global connection.
#[derive(Clone)]
pub struct AppState {
    pub pool: trackboard_db::DbPool,
    /// Link type icon storage.
    pub icons: Arc<IconStore>,
}
