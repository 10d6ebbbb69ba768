//! Aggregate queries backing `GET /api/dashboard`.

use projectdash_core::dashboard::DashboardSummary;
use projectdash_core::status::{ProjectStatus, TaskStatus};
use sqlx::SqlitePool;

use crate::error::StoreResult;

/// Reads dashboard counts. Holds no state; every call hits the database.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute the dashboard summary from the current table contents.
    ///
    /// All four counts come from a single statement so they describe the
    /// same snapshot.
    pub async fn summary(pool: &SqlitePool) -> StoreResult<DashboardSummary> {
        let (total_projects, active_projects, total_tasks, completed_tasks) =
            sqlx::query_as::<_, (i64, i64, i64, i64)>(
                "SELECT \
                     (SELECT COUNT(*) FROM projects), \
                     (SELECT COUNT(*) FROM projects WHERE status = ?1), \
                     (SELECT COUNT(*) FROM tasks), \
                     (SELECT COUNT(*) FROM tasks WHERE status = ?2)",
            )
            .bind(ProjectStatus::Active.as_str())
            .bind(TaskStatus::Completed.as_str())
            .fetch_one(pool)
            .await?;

        Ok(DashboardSummary::from_counts(
            total_projects,
            active_projects,
            total_tasks,
            completed_tasks,
        ))
    }
}
