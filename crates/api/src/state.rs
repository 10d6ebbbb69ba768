/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cloning is cheap: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool; the only owner of persisted rows.
    pub pool: projectdash_db::DbPool,
}
