use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET  /projects   -> list_projects
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/projects", get(project::list_projects))
}
