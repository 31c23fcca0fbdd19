//! Route definitions for the `/signups` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::signup;
use crate::state::AppState;

/// Routes mounted at `/signups`.
///
/// ```text
/// POST   /        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(signup::create))
}
