//! Error types returned while configuring the logger.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that abort logger configuration.
///
/// Log directory problems are not represented here: they degrade the
/// configuration to console-only output instead of failing it.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("log file already exists: {}", path.display())]
    FileAlreadyExists { path: PathBuf },

    #[error("unable to create log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("a global logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}
