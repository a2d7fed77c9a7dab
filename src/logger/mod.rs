//! Timestamped logger with feature-gated levels.
//! - `log-info` enables `INFO` output (enabled by default).
//! - `log-debug` enables `DEBUG` output (enabled by default).
//! - `file-logging` enables [`FileLogger`], which appends lines to a file.
//! - `ERROR` is always active.
//!
//! Every emitted line has the shape `[<timestamp>] <LEVEL>: <message>`.
//! `INFO` and `DEBUG` go to stdout, `ERROR` goes to stderr.
//!
//! Loggers are values, not globals: anything that logs takes an
//! implementation of [`Logger`] so tests can hand in a [`MemoryLogger`].

mod console;
#[cfg(feature = "file-logging")]
mod file;
mod memory;

pub use console::ConsoleLogger;
#[cfg(feature = "file-logging")]
pub use file::FileLogger;
pub use memory::MemoryLogger;

use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::str::FromStr;

/// `ctime` layout, e.g. `Wed Jun 30 21:49:08 1993`. Day of month is space padded.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Logging levels, ordered from least to most verbose.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Error-level messages (always enabled).
    Error = 1,
    /// Info-level messages (requires `log-info` feature).
    Info = 2,
    /// Debug-level messages (requires `log-debug` feature).
    Debug = 3,
}

impl Level {
    /// Upper-case tag printed between the timestamp and the message.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Whether console output for this level goes to stderr.
    #[must_use]
    pub const fn to_stderr(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Whether the level survived the compile-time feature gates.
    #[must_use]
    pub const fn is_compiled_in(self) -> bool {
        match self {
            Self::Error => true,
            Self::Info => cfg!(feature = "log-info"),
            Self::Debug => cfg!(feature = "log-debug"),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Level {
    type Err = String;

    /// Case-insensitive; accepts `error`/`err`, `info` and `debug`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("Unknown log level: '{s}'")),
        }
    }
}

/// Determine the default threshold based on enabled features.
///
/// - When the `log-debug` feature is enabled, defaults to `Level::Debug`.
/// - Else when `log-info` is enabled, defaults to `Level::Info`.
/// - Otherwise defaults to `Level::Error`.
#[must_use]
pub const fn default_threshold() -> Level {
    if cfg!(feature = "log-debug") {
        Level::Debug
    } else if cfg!(feature = "log-info") {
        Level::Info
    } else {
        Level::Error
    }
}

/// Decide whether a message at `level` passes a logger set to `threshold`.
///
/// Applies the feature gates first, then the runtime comparison.
#[must_use]
pub const fn should_log(level: Level, threshold: Level) -> bool {
    level.is_compiled_in() && (level as u8) <= (threshold as u8)
}

/// Current local wall-clock time in [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Format any point in time the way [`timestamp`] does.
#[must_use]
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Build one log line: `[<timestamp>] <LEVEL>: <message>`.
#[must_use]
pub fn format_line(timestamp: &str, level: Level, message: &str) -> String {
    format!("[{timestamp}] {level}: {message}")
}

/// A logging capability.
///
/// Implementors provide [`Logger::emit`]; the named entry points map onto it.
pub trait Logger {
    /// Emit one message at `level`. Implementations decide filtering and sink.
    fn emit(&self, level: Level, message: &str);

    /// Informational message (`INFO`).
    fn log(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Error message (`ERROR`).
    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Debug message (`DEBUG`).
    fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn emit(&self, level: Level, message: &str) {
        (**self).emit(level, message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn emit(&self, level: Level, message: &str) {
        (**self).emit(level, message);
    }
}

/// Discards everything. The logger owned by a plain [`crate::Calculator`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Silent;

impl Logger for Silent {
    fn emit(&self, _level: Level, _message: &str) {}
}
