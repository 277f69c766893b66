// Rust guideline compliant 2026-10-18

//! Tracing setup for the `bbd` binary. Logs go to stderr so stdout stays
//! parseable.

use buildboard_app::{AppError, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Parses a configured log level.
///
/// # Errors
///
/// Returns `InvalidInput` for anything but `error`, `warn`, `info` or
/// `debug`.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => Err(AppError::InvalidInput(format!("Unknown log level: {other}"))),
    }
}

/// Installs the global subscriber. JSON output mode also logs as JSON.
///
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns an error if the level cannot be parsed.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let level = parse_log_level(level)?;

    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(());
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert!(matches!(
            parse_log_level("trace"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
