//! Typed path parameter helpers.

use workout_core::error::AppError;

/// Parses a numeric record id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation(format!("Invalid id: {s}")))
}
