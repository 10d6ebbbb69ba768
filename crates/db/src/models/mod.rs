//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Validate` create DTO for inserts; `None` fields are filled with
//!   defaults by the repository
//!
//! There are no update DTOs: rows are never modified after insert. The JSON
//! shape of a row lives in the API crate's wire types.

pub mod project;
pub mod task;
