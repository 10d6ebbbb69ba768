//! Positional row encoding for the list endpoints.
//!
//! The dashboard page indexes rows by position (`project[3]` is the status),
//! so projects and tasks go over the wire as JSON arrays in column order
//! rather than as objects.

use projectdash_db::models::project::Project;
use projectdash_db::models::task::Task;
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A project encoded as
/// `[id, name, description, status, created_date, due_date, progress]`.
#[derive(Debug)]
pub struct ProjectRow(pub Project);

/// A task encoded as
/// `[id, project_id, title, description, status, priority, assigned_to, created_date, due_date]`.
#[derive(Debug)]
pub struct TaskRow(pub Task);

impl From<Project> for ProjectRow {
    fn from(project: Project) -> Self {
        Self(project)
    }
}

impl From<Task> for TaskRow {
    fn from(task: Task) -> Self {
        Self(task)
    }
}

impl Serialize for ProjectRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let p = &self.0;
        let mut row = serializer.serialize_tuple(7)?;
        row.serialize_element(&p.id)?;
        row.serialize_element(&p.name)?;
        row.serialize_element(&p.description)?;
        row.serialize_element(&p.status)?;
        row.serialize_element(&p.created_date)?;
        row.serialize_element(&p.due_date)?;
        row.serialize_element(&p.progress)?;
        row.end()
    }
}

impl Serialize for TaskRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let t = &self.0;
        let mut row = serializer.serialize_tuple(9)?;
        row.serialize_element(&t.id)?;
        row.serialize_element(&t.project_id)?;
        row.serialize_element(&t.title)?;
        row.serialize_element(&t.description)?;
        row.serialize_element(&t.status)?;
        row.serialize_element(&t.priority)?;
        row.serialize_element(&t.assigned_to)?;
        row.serialize_element(&t.created_date)?;
        row.serialize_element(&t.due_date)?;
        row.end()
    }
}
