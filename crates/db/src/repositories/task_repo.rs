//! Repository for the `tasks` table.

use projectdash_core::error::CoreError;
use projectdash_core::types::{today, DbId};
use projectdash_core::validation::validate_required_text;
use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};
use validator::Validate;

use crate::error::StoreResult;
use crate::models::task::{NewTask, Task};
use crate::repositories::ProjectRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, title, description, status, priority, assigned_to, created_date, due_date";

/// Provides insert and read operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the stored row.
    ///
    /// Omitted fields are filled before the insert: status `todo`, priority
    /// `medium`, `created_date` today. Fails with `CoreError::NotFound` if
    /// `project_id` does not reference an existing project.
    pub async fn create(conn: &mut SqliteConnection, input: &NewTask) -> StoreResult<Task> {
        input.validate()?;
        validate_required_text("title", &input.title)?;

        if ProjectRepo::find_by_id(&mut *conn, input.project_id)
            .await?
            .is_none()
        {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: input.project_id,
            }
            .into());
        }

        let query = format!(
            "INSERT INTO tasks (id, project_id, title, description, status, priority, \
                                assigned_to, created_date, due_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(input.id)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status.unwrap_or_default().as_str())
            .bind(input.priority.unwrap_or_default().as_str())
            .bind(&input.assigned_to)
            .bind(input.created_date.unwrap_or_else(today))
            .bind(input.due_date)
            .fetch_one(&mut *conn)
            .await?;
        Ok(task)
    }

    /// List all tasks, most recent `created_date` first.
    ///
    /// Tasks sharing a date keep ascending id order.
    pub async fn list(pool: &SqlitePool) -> StoreResult<Vec<Task>> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_date DESC, id ASC");
        let tasks = sqlx::query_as::<_, Task>(&query).fetch_all(pool).await?;
        Ok(tasks)
    }

    /// List the tasks of one project, same ordering as [`TaskRepo::list`].
    pub async fn list_by_project(pool: &SqlitePool, project_id: DbId) -> StoreResult<Vec<Task>> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = ?1 \
             ORDER BY created_date DESC, id ASC"
        );
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;
        Ok(tasks)
    }

    /// Count all tasks.
    pub async fn count<'e, E>(executor: E) -> StoreResult<i64>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}
