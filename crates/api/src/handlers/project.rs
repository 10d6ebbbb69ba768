use axum::extract::State;
use axum::Json;
use projectdash_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;
use crate::wire::ProjectRow;

/// GET /api/projects
///
/// Every project as a positional row, most recently created first.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectRow>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(projects.into_iter().map(ProjectRow::from).collect()))
}
