//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Reads
//! accept `&SqlitePool`; inserts accept `&mut SqliteConnection` so they can
//! run inside the seeding transaction.

pub mod dashboard_repo;
pub mod project_repo;
pub mod task_repo;

pub use dashboard_repo::DashboardRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
