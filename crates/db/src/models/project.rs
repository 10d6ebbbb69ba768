//! Project entity model and DTOs.

use projectdash_core::status::ProjectStatus;
use projectdash_core::types::{Date, DbId};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub created_date: Date,
    pub due_date: Option<Date>,
    pub progress: i64,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewProject {
    /// Explicit id; auto-assigned when omitted.
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    /// Defaults to `active`.
    pub status: Option<ProjectStatus>,
    /// Defaults to today (UTC).
    pub created_date: Option<Date>,
    pub due_date: Option<Date>,
    /// Defaults to 0. Must be within 0–100.
    pub progress: Option<i64>,
}

impl NewProject {
    /// A project with only the required field set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
