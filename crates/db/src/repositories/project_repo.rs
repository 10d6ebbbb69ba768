//! Repository for the `projects` table.

use projectdash_core::types::{today, DbId};
use projectdash_core::validation::{validate_progress, validate_required_text};
use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};
use validator::Validate;

use crate::error::StoreResult;
use crate::models::project::{NewProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status, created_date, due_date, progress";

/// Provides insert and read operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the stored row.
    ///
    /// Omitted fields are filled before the insert: status `active`,
    /// `created_date` today, progress 0. Invalid input is rejected with
    /// `CoreError::Validation` without touching storage.
    pub async fn create(conn: &mut SqliteConnection, input: &NewProject) -> StoreResult<Project> {
        input.validate()?;
        validate_required_text("name", &input.name)?;

        let progress = input.progress.unwrap_or(0);
        validate_progress(progress)?;

        let query = format!(
            "INSERT INTO projects (id, name, description, status, created_date, due_date, progress)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status.unwrap_or_default().as_str())
            .bind(input.created_date.unwrap_or_else(today))
            .bind(input.due_date)
            .bind(progress)
            .fetch_one(&mut *conn)
            .await?;
        Ok(project)
    }

    /// Find a project by id.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> StoreResult<Option<Project>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(project)
    }

    /// List all projects, most recent `created_date` first.
    ///
    /// Projects sharing a date keep ascending id order.
    pub async fn list(pool: &SqlitePool) -> StoreResult<Vec<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_date DESC, id ASC");
        let projects = sqlx::query_as::<_, Project>(&query)
            .fetch_all(pool)
            .await?;
        Ok(projects)
    }

    /// Count all projects.
    pub async fn count<'e, E>(executor: E) -> StoreResult<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}
