//! Dashboard summary computation.
//!
//! The database layer supplies raw counts; the derived completion rate is
//! computed here so it can be tested without a store.

use serde::Serialize;

/// Aggregate statistics shown at the top of the dashboard.
///
/// Serialized as-is by `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_projects: i64,
    pub active_projects: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    /// Percentage of completed tasks, 0–100, unrounded.
    pub completion_rate: f64,
}

impl DashboardSummary {
    /// Build a summary from raw counts.
    pub fn from_counts(
        total_projects: i64,
        active_projects: i64,
        total_tasks: i64,
        completed_tasks: i64,
    ) -> Self {
        Self {
            total_projects,
            active_projects,
            total_tasks,
            completed_tasks,
            completion_rate: completion_rate(completed_tasks, total_tasks),
        }
    }
}

/// `completed / total * 100`, or `0.0` when there are no tasks.
pub fn completion_rate(completed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    (completed as f64 / total as f64) * 100.0
}
