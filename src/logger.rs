//! Logger configuration module.
//!
//! A [`LoggerConfig`] collects the sinks and threshold for the process. It is
//! owned by the caller and only becomes the global `log` backend once
//! [`LoggerConfig::install`] is called.
use std::{
    fmt,
    fs::{self, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::{
    domain::{
        format::{ColorFormatter, PlainFormatter},
        level::parse_level,
        models::line::LogLine,
        sink::{Sink, SinkKind},
        utils::LogFileName,
    },
    error::LoggerError,
};

/// Threshold used when the caller does not pick one.
pub const DEFAULT_LEVEL: &str = "INFO";

/// Directory that receives log files, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug)]
pub struct LoggerConfig {
    /// Records above this level are dropped before reaching any sink
    threshold: LevelFilter,
    /// Directory in which the file sink creates its log file
    log_dir: PathBuf,
    /// Sinks in the order they were attached
    sinks: Vec<Sink>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_DIR)
    }
}

impl LoggerConfig {
    /// Creates an unconfigured logger with no sinks attached.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            threshold: LevelFilter::Info,
            log_dir: log_dir.into(),
            sinks: Vec::new(),
        }
    }

    pub fn threshold(&self) -> LevelFilter {
        self.threshold
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    /// Appends a sink after the ones already attached.
    pub fn attach(&mut self, sink: Sink) {
        self.sinks.push(sink);
    }

    /// Paths of every log file a sink writes to.
    pub fn log_files(&self) -> impl Iterator<Item = &Path> {
        self.sinks.iter().filter_map(|sink| match sink.kind() {
            SinkKind::File(path) => Some(path.as_path()),
            SinkKind::Console => None,
        })
    }

    /// Sets the threshold, attaches a colored console sink and, if asked,
    /// a file sink writing to a new timestamped file in the log directory.
    ///
    /// Calling this again attaches another set of sinks next to the
    /// existing ones.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * `level_name` is not a known level, in which case nothing is attached
    /// * the log file already exists or cannot be created
    ///
    /// A log directory that cannot be created is reported through the
    /// console sink and leaves the config with console output only.
    pub fn configure(&mut self, level_name: &str, add_file_sink: bool) -> Result<(), LoggerError> {
        self.configure_at(level_name, add_file_sink, Local::now())
    }

    /// Same as [`configure`](Self::configure), naming the log file after `now`.
    pub fn configure_at(
        &mut self,
        level_name: &str,
        add_file_sink: bool,
        now: DateTime<Local>,
    ) -> Result<(), LoggerError> {
        self.threshold = parse_level(level_name)?;

        self.attach(Sink::console(ColorFormatter::new(PlainFormatter)));
        self.emit(Level::Info, format_args!("console sink configured"));

        self.emit(Level::Info, format_args!("configuring file sink"));
        if !add_file_sink {
            return Ok(());
        }

        match fs::create_dir(&self.log_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => self.emit(
                Level::Info,
                format_args!(
                    "log directory {} already exists, continuing",
                    self.log_dir.display()
                ),
            ),
            Err(e) => {
                self.emit(
                    Level::Error,
                    format_args!("unable to configure file sink: {}", e),
                );
                return Ok(());
            }
        }

        let path = LogFileName::new(now).in_dir(&self.log_dir);
        let file = OpenOptions::new()
            .append(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| match source.kind() {
                ErrorKind::AlreadyExists => LoggerError::FileAlreadyExists { path: path.clone() },
                _ => LoggerError::LogFile {
                    path: path.clone(),
                    source,
                },
            })?;

        self.attach(Sink::file(path.clone(), file, PlainFormatter));
        self.emit(
            Level::Info,
            format_args!("file sink configured at {}", path.display()),
        );

        Ok(())
    }

    /// Registers this config as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::AlreadyInstalled`] if a global logger was set before.
    pub fn install(self) -> Result<(), LoggerError> {
        let threshold = self.threshold;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(threshold);
        Ok(())
    }

    fn emit(&self, level: Level, args: fmt::Arguments) {
        self.log(
            &Record::builder()
                .args(args)
                .level(level)
                .target(module_path!())
                .build(),
        );
    }
}

impl Log for LoggerConfig {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.threshold
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // One capture per record, so every sink shows the same timestamp.
        let line = LogLine::from_record(record);
        for sink in &self.sinks {
            sink.write(record, &line);
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}

/// Configures the process-wide logger in one step.
///
/// Builds a [`LoggerConfig`] for the `logs` directory, configures it and
/// installs it. When the log file cannot be created the console-only
/// logger is still installed before the error is returned.
///
/// # Errors
///
/// See [`LoggerConfig::configure`] and [`LoggerConfig::install`].
pub fn configure_logger(level_name: &str, add_file_sink: bool) -> Result<(), LoggerError> {
    let mut config = LoggerConfig::default();

    match config.configure(level_name, add_file_sink) {
        Err(err @ LoggerError::InvalidLevel(_)) => Err(err),
        result => {
            config.install()?;
            result
        }
    }
}
