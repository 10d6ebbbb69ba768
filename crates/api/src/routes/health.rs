//! Liveness probe mounted at `/health`, outside the `/api` tree.
//!
//! Always answers 200; a store that cannot run `SELECT 1` downgrades the
//! reported status instead of failing the request.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    /// `CARGO_PKG_VERSION` of the server binary.
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_store_probe(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy {
                ServiceStatus::Ok
            } else {
                ServiceStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn report_health(State(state): State<AppState>) -> Json<HealthReport> {
    let probe = projectdash_db::health_check(&state.pool).await;
    if let Err(e) = &probe {
        tracing::warn!(error = %e, "Store unreachable during health check");
    }
    Json(HealthReport::from_store_probe(probe.is_ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report_health))
}
