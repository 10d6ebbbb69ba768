use projectdash_core::error::CoreError;

/// Errors raised by the store.
///
/// `Storage` covers every failure of the underlying SQLite file: unwritable
/// paths, disk full, corrupt pages, and rows whose enumerated columns hold
/// unknown tokens (reported by sqlx as column decode errors).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Schema migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Rejected before reaching storage (validation, missing parent row).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        StoreError::Core(errors.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
