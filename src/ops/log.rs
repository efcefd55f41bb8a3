//! Recording new readings.

use crate::errors::AppResult;
use crate::readings::{Reading, ReadingStore};
use tracing::info;

/// Validates `level` and appends it to the log with the current time.
///
/// # Errors
///
/// Returns `AppError::Validation` for levels outside 40..=500 and
/// `AppError::Storage` if the log cannot be read or rewritten.
pub fn log_reading(store: &ReadingStore, level: i64) -> AppResult<Reading> {
    info!("Logging reading of {} mg/dL", level);
    store.append(level)
}
