//! Field checks shared by the insert DTOs.
//!
//! Range and length rules live on the DTOs as `validator` attributes; the
//! helpers here cover what the derive cannot express.

use crate::error::CoreError;

/// Lowest accepted project progress percentage.
pub const MIN_PROGRESS: i64 = 0;

/// Highest accepted project progress percentage.
pub const MAX_PROGRESS: i64 = 100;

/// Reject empty or whitespace-only values for required text columns.
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Reject progress values outside `MIN_PROGRESS..=MAX_PROGRESS`.
pub fn validate_progress(progress: i64) -> Result<(), CoreError> {
    if !(MIN_PROGRESS..=MAX_PROGRESS).contains(&progress) {
        return Err(CoreError::Validation(format!(
            "progress must be between {MIN_PROGRESS} and {MAX_PROGRESS}, got {progress}"
        )));
    }
    Ok(())
}
