//! Command-line interface configuration for the logsetup demo.
//!
//! Every option can also be supplied through an environment variable, which
//! may in turn come from a `.env` file in the working directory.

use std::path::PathBuf;

use clap::Parser;
use logsetup::logger::{DEFAULT_LEVEL, DEFAULT_LOG_DIR};

/// Command-line arguments for configuring the demo logger.
#[derive(Parser)]
#[clap(author, version, about = "Colored console and file logger bootstrap")]
pub struct Args {
    /// Minimum level to emit: TRACE, DEBUG, INFO, WARNING (or WARN), ERROR.
    #[clap(short, long, env = "LOG_LEVEL", default_value = DEFAULT_LEVEL)]
    pub level: String,

    /// Also write plain lines to a timestamped file in the log directory.
    #[clap(short, long, env = "LOG_TO_FILE")]
    pub file_sink: bool,

    /// Directory that receives the log file.
    #[clap(long, env = "LOG_DIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,
}
