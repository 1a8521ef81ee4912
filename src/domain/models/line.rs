use std::thread;

use chrono::{DateTime, Local};
use log::{Level, Record};

use crate::domain::level::{level_color, level_name};

const RESET: &str = "\x1B[0m";

/// A log record captured at emission time, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Local time the record was captured
    pub timestamp: DateTime<Local>,
    pub level: Level,
    /// Text printed in the level field, possibly wrapped in color codes
    pub level_name: String,
    /// Component that emitted the record (the `log` target)
    pub component: String,
    /// Name of the thread that emitted the record
    pub thread: String,
    pub message: String,
}

impl LogLine {
    /// Creates a line stamped with the current local time and thread.
    pub fn new(level: Level, component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            level_name: level_name(level).to_string(),
            component: component.into(),
            thread: current_thread_name(),
            message: message.into(),
        }
    }

    pub fn from_record(record: &Record) -> Self {
        Self::new(record.level(), record.target(), record.args().to_string())
    }

    /// Builds a copy of this line whose level name is wrapped in the level's
    /// console color. Lines for levels without a color come back unchanged.
    pub fn colorized(&self) -> Self {
        let level_name = match level_color(self.level) {
            Some(color) => format!("\x1B[{}m{}{}", color.to_fg_str(), self.level_name, RESET),
            None => self.level_name.clone(),
        };

        Self {
            level_name,
            ..self.clone()
        }
    }
}

fn current_thread_name() -> String {
    thread::current()
        .name()
        .unwrap_or("<unnamed>")
        .to_string()
}
