//! The fixed sample dataset inserted into an empty store.

use chrono::NaiveDate;
use projectdash_core::status::{ProjectStatus, TaskPriority, TaskStatus};
use sqlx::SqlitePool;

use crate::error::StoreResult;
use crate::models::project::NewProject;
use crate::models::task::NewTask;
use crate::repositories::{ProjectRepo, TaskRepo};

/// Build a date from compile-time constants.
fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn project(
    id: i64,
    name: &str,
    description: &str,
    status: ProjectStatus,
    created: Option<NaiveDate>,
    due: Option<NaiveDate>,
    progress: i64,
) -> NewProject {
    NewProject {
        id: Some(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        status: Some(status),
        created_date: created,
        due_date: due,
        progress: Some(progress),
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: i64,
    project_id: i64,
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: TaskPriority,
    assigned_to: &str,
    created: Option<NaiveDate>,
    due: Option<NaiveDate>,
) -> NewTask {
    NewTask {
        id: Some(id),
        project_id,
        title: title.to_string(),
        description: Some(description.to_string()),
        status: Some(status),
        priority: Some(priority),
        assigned_to: Some(assigned_to.to_string()),
        created_date: created,
        due_date: due,
    }
}

/// Sample projects: two active, one in planning.
pub fn sample_projects() -> Vec<NewProject> {
    use ProjectStatus::{Active, Planning};
    vec![
        project(
            1,
            "Website Redesign",
            "Complete redesign of company website",
            Active,
            date(2024, 1, 15),
            date(2024, 3, 15),
            65,
        ),
        project(
            2,
            "Mobile App Development",
            "Develop iOS and Android mobile application",
            Active,
            date(2024, 2, 1),
            date(2024, 6, 1),
            30,
        ),
        project(
            3,
            "Marketing Campaign",
            "Q2 marketing campaign planning and execution",
            Planning,
            date(2024, 3, 1),
            date(2024, 5, 31),
            15,
        ),
    ]
}

/// Sample tasks: six across the three sample projects, two completed.
pub fn sample_tasks() -> Vec<NewTask> {
    use TaskPriority::{High, Medium};
    use TaskStatus::{Completed, InProgress, Todo};
    vec![
        task(
            1,
            1,
            "Design mockups",
            "Create initial design mockups",
            Completed,
            High,
            "John Doe",
            date(2024, 1, 16),
            date(2024, 1, 25),
        ),
        task(
            2,
            1,
            "Frontend development",
            "Implement responsive frontend",
            InProgress,
            High,
            "Jane Smith",
            date(2024, 1, 26),
            date(2024, 2, 15),
        ),
        task(
            3,
            1,
            "Backend integration",
            "Connect frontend with backend APIs",
            Todo,
            Medium,
            "Bob Johnson",
            date(2024, 2, 16),
            date(2024, 3, 1),
        ),
        task(
            4,
            2,
            "Market research",
            "Research target audience and competitors",
            Completed,
            Medium,
            "Alice Brown",
            date(2024, 2, 2),
            date(2024, 2, 10),
        ),
        task(
            5,
            2,
            "UI/UX design",
            "Design mobile app interface",
            InProgress,
            High,
            "Charlie Wilson",
            date(2024, 2, 11),
            date(2024, 2, 28),
        ),
        task(
            6,
            3,
            "Campaign strategy",
            "Develop marketing strategy",
            Todo,
            High,
            "Diana Davis",
            date(2024, 3, 2),
            date(2024, 3, 15),
        ),
    ]
}

/// Insert `projects` then `tasks`, but only if the projects table is empty.
///
/// Runs in a single transaction: either every row lands or none does.
/// Returns `true` when rows were inserted, `false` when the store already
/// held projects.
pub async fn seed_if_empty(
    pool: &SqlitePool,
    projects: &[NewProject],
    tasks: &[NewTask],
) -> StoreResult<bool> {
    let mut tx = pool.begin().await?;

    let existing = ProjectRepo::count(&mut *tx).await?;
    if existing > 0 {
        tracing::debug!(existing, "Store already populated, skipping seed");
        return Ok(false);
    }

    for input in projects {
        ProjectRepo::create(&mut *tx, input).await?;
    }
    for input in tasks {
        TaskRepo::create(&mut *tx, input).await?;
    }

    tx.commit().await?;
    tracing::info!(
        projects = projects.len(),
        tasks = tasks.len(),
        "Seeded empty store"
    );
    Ok(true)
}
