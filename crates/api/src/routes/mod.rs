pub mod dashboard;
pub mod health;
pub mod index;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /dashboard      summary counts and completion rate (GET)
/// /projects       all projects as positional rows (GET)
/// /tasks          all tasks as positional rows (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(dashboard::router())
        .merge(project::router())
        .merge(task::router())
}
