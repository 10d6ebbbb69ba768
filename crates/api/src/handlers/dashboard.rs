//! Handler for the dashboard summary.

use axum::extract::State;
use axum::Json;
use projectdash_core::dashboard::DashboardSummary;
use projectdash_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard
///
/// Returns project/task counts and the task completion rate, recomputed on
/// every request.
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    Ok(Json(summary))
}
