pub mod dashboard;
pub mod index;
pub mod project;
pub mod task;
