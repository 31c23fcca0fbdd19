//! Route definitions for the `/guests` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::guest;
use crate::state::AppState;

/// Routes mounted at `/guests`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(guest::list).post(guest::create))
        .route("/{id}", get(guest::get_by_id).delete(guest::delete))
}
