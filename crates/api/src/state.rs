/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable. Handlers hold no other shared mutable state;
/// each request opens its own transaction from `pool`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: registry_db::DbPool,
}
