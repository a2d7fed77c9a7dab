//! File sink, available with the `file-logging` feature.

use super::{default_threshold, format_line, should_log, timestamp, Level, Logger};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Appends timestamped lines to a file instead of the console.
///
/// Every level goes to the same file; the stdout/stderr split does not apply.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    threshold: Level,
    file: Mutex<File>,
}

impl FileLogger {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be opened.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            threshold: default_threshold(),
            file: Mutex::new(file),
        })
    }

    /// Replace the threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// The file being written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The most verbose level this logger emits.
    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }
}

impl Logger for FileLogger {
    fn emit(&self, level: Level, message: &str) {
        if !should_log(level, self.threshold) {
            return;
        }
        let line = format_line(&timestamp(), level, message);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
            let _ = file.flush();
        }
    }
}
