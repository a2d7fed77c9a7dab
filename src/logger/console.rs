//! Console sink: stdout for `INFO`/`DEBUG`, stderr for `ERROR`.

use super::{default_threshold, format_line, should_log, timestamp, Level, Logger};
use std::io::{self, Write};

/// Writes each message as one timestamped line to the standard streams.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConsoleLogger {
    threshold: Level,
}

impl ConsoleLogger {
    /// Console logger using the feature-derived [`default_threshold`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_threshold(default_threshold())
    }

    /// Console logger that drops anything more verbose than `threshold`.
    #[must_use]
    pub const fn with_threshold(threshold: Level) -> Self {
        Self { threshold }
    }

    /// The most verbose level this logger emits.
    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
    fn emit(&self, level: Level, message: &str) {
        if !should_log(level, self.threshold) {
            return;
        }
        let line = format_line(&timestamp(), level, message);
        // Write failures are ignored.
        if level.to_stderr() {
            let _ = writeln!(io::stderr(), "{line}");
        } else {
            let _ = writeln!(io::stdout(), "{line}");
        }
    }
}
