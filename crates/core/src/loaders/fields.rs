//! Field-level validation shared by every loader.

use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::record::DATE_FORMAT;

/// Parse a `YYYY-MM-DD` date. Blank input counts as a missing field.
pub fn parse_date(field: &str, record: usize, raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::missing(field, record));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| CoreError::mismatch(field, record, trimmed))
}

/// Parse a textual amount. Blank input counts as a missing field.
pub fn parse_amount(field: &str, record: usize, raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::missing(field, record));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::mismatch(field, record, trimmed))?;
    check_amount(field, record, value)
}

/// Reject NaN and infinities, which would poison every sum they touch.
pub fn check_amount(field: &str, record: usize, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::mismatch(field, record, value.to_string()))
    }
}
