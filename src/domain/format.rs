//! Line formatters used by the sinks.
//!
//! Every sink renders the same layout:
//!
//! ```text
//! [2024-05-01 12:30:45.042] INFO @ app::db - (main): connected
//! ```
//!
//! The console sink additionally colors the level field.

use crate::domain::models::line::LogLine;

/// Date and time part of the line timestamp, without milliseconds.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a [`LogLine`] into the text written by a sink.
pub trait LineFormat: Send + Sync {
    fn format(&self, line: &LogLine) -> String;
}

/// Renders the fixed line layout with no escape codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl LineFormat for PlainFormatter {
    fn format(&self, line: &LogLine) -> String {
        format!(
            "[{}.{:03}] {} @ {} - ({}): {}",
            line.timestamp.format(DATE_FORMAT),
            line.timestamp.timestamp_subsec_millis() % 1000,
            line.level_name,
            line.component,
            line.thread,
            line.message
        )
    }
}

/// Wraps another formatter and colors the level field before delegating.
///
/// The line handed in is left untouched; the base formatter receives a
/// colorized copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorFormatter<F = PlainFormatter> {
    base: F,
}

impl<F: LineFormat> ColorFormatter<F> {
    pub fn new(base: F) -> Self {
        Self { base }
    }
}

impl<F: LineFormat> LineFormat for ColorFormatter<F> {
    fn format(&self, line: &LogLine) -> String {
        self.base.format(&line.colorized())
    }
}
