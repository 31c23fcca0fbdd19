//! Route definitions for the `/appearances` resource.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::appearance;
use crate::state::AppState;

/// Routes mounted at `/appearances`.
///
/// ```text
/// POST   /        -> create
/// PATCH  /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(appearance::create))
        .route("/{id}", patch(appearance::update))
}
