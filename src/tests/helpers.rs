use std::{fs::OpenOptions, path::Path, thread, time::Duration};

use chrono::{DateTime, Local, TimeZone, Timelike};
use log::{Level, Log, Record};

use crate::domain::{format::LineFormat, models::line::LogLine, sink::Sink};

/// 2024-05-01 12:30:45.042 local time.
pub fn fixed_time() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 5, 1, 12, 30, 45)
        .single()
        .and_then(|time| time.with_nanosecond(42_000_000))
        .expect("Fixed test time should be unambiguous")
}

pub fn create_mock_line(level: Level) -> LogLine {
    LogLine {
        timestamp: fixed_time(),
        thread: "worker".to_string(),
        ..LogLine::new(level, "app::db", "connected")
    }
}

pub fn emit(logger: &impl Log, level: Level, target: &str, message: &str) {
    logger.log(
        &Record::builder()
            .args(format_args!("{}", message))
            .level(level)
            .target(target)
            .build(),
    );
}

pub fn create_file_sink<F: LineFormat + 'static>(path: &Path, format: F) -> Sink {
    let file = OpenOptions::new()
        .append(true)
        .create_new(true)
        .open(path)
        .expect("Failed to create test log file");
    Sink::file(path.to_path_buf(), file, format)
}

/// Delays every render so that a clock read per sink would drift apart.
pub struct SlowFormatter<F> {
    base: F,
}

impl<F: LineFormat> SlowFormatter<F> {
    pub fn new(base: F) -> Self {
        Self { base }
    }
}

impl<F: LineFormat> LineFormat for SlowFormatter<F> {
    fn format(&self, line: &LogLine) -> String {
        thread::sleep(Duration::from_millis(20));
        self.base.format(line)
    }
}
