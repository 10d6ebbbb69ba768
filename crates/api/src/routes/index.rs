use axum::routing::get;
use axum::Router;

use crate::handlers::index;
use crate::state::AppState;

/// Mount the dashboard page at `/`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index::index))
}
