// Rust guideline compliant 2026-10-18

//! Timestamp helpers for buildboard.

use crate::error::{AppError, Result};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of Unix timestamps for document writes.
pub type Clock = Arc<dyn Fn() -> Result<i64> + Send + Sync>;

/// Returns the current Unix timestamp in seconds.
///
/// # Errors
///
/// Returns an error if the system clock is before the Unix epoch.
pub fn unix_timestamp() -> Result<i64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| AppError::InvalidInput(format!("System time before epoch: {err}")))?
        .as_secs() as i64;
    Ok(now)
}

/// Returns a clock reading the system time.
#[must_use]
pub fn system_clock() -> Clock {
    Arc::new(unix_timestamp)
}
