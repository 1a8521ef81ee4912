//! Severity names, thresholds and console colors.

use colored::Color;
use log::{Level, LevelFilter};

use crate::error::LoggerError;

/// Parses a threshold name into a level filter.
///
/// Names are matched exactly and in upper case. `WARN` is accepted as an
/// alias of `WARNING`, and `NOTSET` lets every record through.
/// `CRITICAL` and `FATAL` are rejected: `log` has no level above `ERROR`.
///
/// # Errors
///
/// Returns [`LoggerError::InvalidLevel`] if the name is not a known level.
pub fn parse_level(name: &str) -> Result<LevelFilter, LoggerError> {
    match name {
        "NOTSET" | "TRACE" => Ok(LevelFilter::Trace),
        "DEBUG" => Ok(LevelFilter::Debug),
        "INFO" => Ok(LevelFilter::Info),
        "WARNING" | "WARN" => Ok(LevelFilter::Warn),
        "ERROR" => Ok(LevelFilter::Error),
        other => Err(LoggerError::InvalidLevel(other.to_string())),
    }
}

/// Name printed in the level field of a log line.
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Console color for a level, if it has one.
pub fn level_color(level: Level) -> Option<Color> {
    match level {
        Level::Error => Some(Color::Red),
        Level::Warn => Some(Color::Yellow),
        Level::Info => Some(Color::Green),
        Level::Debug => Some(Color::Cyan),
        Level::Trace => None,
    }
}
