//! Process-wide logger bootstrap.
//!
//! Attaches a colored console sink and, optionally, a plain file sink
//! writing to a timestamped file under `logs/`. Every line uses the layout
//! `[<date> <time>.<millis>] <LEVEL> @ <component> - (<thread>): <message>`.
//!
//! ```no_run
//! logsetup::configure_logger("INFO", true)?;
//! log::info!("ready");
//! # Ok::<(), logsetup::LoggerError>(())
//! ```

pub mod domain;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use domain::{
    format::{ColorFormatter, LineFormat, PlainFormatter},
    level::parse_level,
    models::line::LogLine,
    sink::{Sink, SinkKind},
};
pub use error::LoggerError;
pub use logger::{configure_logger, LoggerConfig};
