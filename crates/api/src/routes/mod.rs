pub mod activity;
pub mod appearance;
pub mod camper;
pub mod episode;
pub mod guest;
pub mod health;
pub mod signup;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campers                 list, create
/// /campers/{id}            get (with activities), patch, delete
///
/// /activities              list, create
/// /activities/{id}         get (with signups), delete
///
/// /signups                 create (returns camper and activity)
///
/// /episodes                list, create
/// /episodes/{id}           get (with appearances and guests), delete
///
/// /guests                  list, create
/// /guests/{id}             get (with appearances and episodes), delete
///
/// /appearances             create (returns episode and guest)
/// /appearances/{id}        patch
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/campers", camper::router())
        .nest("/activities", activity::router())
        .nest("/signups", signup::router())
        .nest("/episodes", episode::router())
        .nest("/guests", guest::router())
        .nest("/appearances", appearance::router())
}
