//! Handler for `GET /health`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use registry_db::TableCounts;
use serde::Serialize;

use crate::state::AppState;

/// Health payload: database reachability, schema state and registry size.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answers and every migration is applied.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `None` when the migrations table could not be read.
    pub pending_migrations: Option<usize>,
    /// Row counts of the six registry tables, `None` when unreachable.
    pub tables: Option<TableCounts>,
}

/// GET /health
///
/// Responds 200 when healthy and 503 otherwise, with the same body shape.
pub async fn check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let tables = registry_db::table_counts(&state.pool)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Registry tables unreachable"))
        .ok();
    let pending_migrations = registry_db::pending_migrations(&state.pool)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Migration state unreadable"))
        .ok();

    let db_healthy = tables.is_some();
    let healthy = db_healthy && pending_migrations == Some(0);
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            pending_migrations,
            tables,
        }),
    )
}
