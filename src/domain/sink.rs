//! Output destinations attached to a [`LoggerConfig`](crate::logger::LoggerConfig).
//!
//! Each sink renders the captured [`LogLine`] with its own formatter and hands
//! the text to an `env_logger` logger, which owns the write target and
//! serializes concurrent writes to it. Sinks never filter on their own; the
//! threshold is applied once by the config before records fan out.

use std::{fmt, fs::File, io::Write, path::PathBuf};

use env_logger::{Builder, Logger, Target, WriteStyle};
use log::{LevelFilter, Log, Record};

use crate::domain::{format::LineFormat, models::line::LogLine};

/// Where a sink writes its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    /// Standard error of the process
    Console,
    /// A log file created during configuration
    File(PathBuf),
}

pub struct Sink {
    kind: SinkKind,
    format: Box<dyn LineFormat>,
    logger: Logger,
}

impl Sink {
    /// Creates a sink writing to standard error.
    pub fn console<F: LineFormat + 'static>(format: F) -> Self {
        Self::build(SinkKind::Console, Target::Stderr, format)
    }

    /// Creates a sink appending to an already opened log file.
    pub fn file<F: LineFormat + 'static>(path: PathBuf, file: File, format: F) -> Self {
        Self::build(SinkKind::File(path), Target::Pipe(Box::new(file)), format)
    }

    fn build<F: LineFormat + 'static>(kind: SinkKind, target: Target, format: F) -> Self {
        // Lines arrive fully rendered, so env_logger's own styling stays off.
        let logger = Builder::new()
            .filter_level(LevelFilter::Trace)
            .write_style(WriteStyle::Never)
            .target(target)
            .format(|buf, record| writeln!(buf, "{}", record.args()))
            .build();

        Self {
            kind,
            format: Box::new(format),
            logger,
        }
    }

    pub fn kind(&self) -> &SinkKind {
        &self.kind
    }

    /// Renders `line` and writes it out under the metadata of `record`.
    pub fn write(&self, record: &Record, line: &LogLine) {
        let rendered = self.format.format(line);

        self.logger.log(
            &Record::builder()
                .args(format_args!("{}", rendered))
                .metadata(record.metadata().clone())
                .build(),
        );
    }

    pub fn flush(&self) {
        self.logger.flush();
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("kind", &self.kind).finish()
    }
}
