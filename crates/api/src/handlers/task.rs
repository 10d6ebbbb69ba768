use axum::extract::State;
use axum::Json;
use projectdash_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::state::AppState;
use crate::wire::TaskRow;

/// GET /api/tasks
///
/// Every task as a positional row, most recently created first.
pub async fn list_tasks(State(state): State<AppState>) -> AppResult<Json<Vec<TaskRow>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    tracing::debug!(count = tasks.len(), "Listed tasks");
    Ok(Json(tasks.into_iter().map(TaskRow::from).collect()))
}
