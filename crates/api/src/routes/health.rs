//! Liveness route reporting on the two stores every request depends on.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when every check passes, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// The icon directory exists (or could be created) and is writable.
    pub icon_store_healthy: bool,
    pub icon_dir: String,
}

impl HealthReport {
    fn is_ok(&self) -> bool {
        self.db_healthy && self.icon_store_healthy
    }
}

/// GET /health
///
/// Answers 200 when the database and icon store are both usable and 503
/// otherwise, with the same body shape either way.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let (db, icons) = tokio::join!(
        trackboard_db::health_check(&state.pool),
        state.icons.check_writable(),
    );

    if let Err(e) = &db {
        tracing::warn!(error = %e, "Database health check failed");
    }
    if let Err(e) = &icons {
        tracing::warn!(error = %e, "Icon store health check failed");
    }

    let mut report = HealthReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: db.is_ok(),
        icon_store_healthy: icons.is_ok(),
        icon_dir: state.icons.root().display().to_string(),
    };

    if report.is_ok() {
        (StatusCode::OK, Json(report))
    } else {
        report.status = "degraded";
        (StatusCode::SERVICE_UNAVAILABLE, Json(report))
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
