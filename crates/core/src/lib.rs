//! Domain types shared by the store and the HTTP layer.
//!
//! This crate has no database or HTTP dependencies; everything here is
//! plain data and pure functions.

pub mod dashboard;
pub mod error;
pub mod status;
pub mod types;
pub mod validation;
