use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// ```text
/// GET  /tasks   -> list_tasks
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/tasks", get(task::list_tasks))
}
