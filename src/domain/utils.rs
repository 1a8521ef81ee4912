//! This module defines a structure and methods for log file name construction

use std::{
    fmt,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

/// Timestamp layout of a log file name: the line timestamp with the space
/// and colons replaced so the name is safe on every filesystem.
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Represents the name of the log file created for one configuration run.
pub struct LogFileName {
    pub created_at: DateTime<Local>,
}

impl LogFileName {
    pub fn new(created_at: DateTime<Local>) -> Self {
        Self { created_at }
    }

    /// Joins the file name onto the log directory.
    pub fn in_dir(&self, dir: &Path) -> PathBuf {
        dir.join(self.to_string())
    }
}

impl fmt::Display for LogFileName {
    /// Formats the name as `YYYY-MM-DDTHH-MM-SS_log.log`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_log.log",
            self.created_at.format(FILE_TIMESTAMP_FORMAT)
        )
    }
}
