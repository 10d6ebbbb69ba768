//! Task entity model and DTOs.

use projectdash_core::status::{TaskPriority, TaskStatus};
use projectdash_core::types::{Date, DbId};
use sqlx::FromRow;
use validator::Validate;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    #[sqlx(try_from = "String")]
    pub priority: TaskPriority,
    pub assigned_to: Option<String>,
    pub created_date: Date,
    pub due_date: Option<Date>,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewTask {
    /// Explicit id; auto-assigned when omitted.
    pub id: Option<DbId>,
    /// Must reference an existing project.
    pub project_id: DbId,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    /// Defaults to `todo`.
    pub status: Option<TaskStatus>,
    /// Defaults to `medium`.
    pub priority: Option<TaskPriority>,
    #[validate(length(max = 200))]
    pub assigned_to: Option<String>,
    /// Defaults to today (UTC).
    pub created_date: Option<Date>,
    pub due_date: Option<Date>,
}

impl NewTask {
    /// A task with only the required fields set.
    pub fn titled(project_id: DbId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            ..Self::default()
        }
    }
}
