/// All primary keys are SQLite INTEGER PRIMARY KEY (rowid aliases).
pub type DbId = i64;

/// Calendar dates are stored and serialized as `YYYY-MM-DD`.
pub type Date = chrono::NaiveDate;

/// The current calendar day in UTC, used when a row omits `created_date`.
pub fn today() -> Date {
    chrono::Utc::now().date_naive()
}
