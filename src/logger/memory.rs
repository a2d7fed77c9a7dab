//! In-memory logger used as a test double.

use super::{Level, Logger};
use std::cell::RefCell;

/// Records every message it receives, in order, without filtering.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RefCell<Vec<(Level, String)>>,
}

impl MemoryLogger {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    /// Messages recorded at `level`, in order.
    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Number of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl Logger for MemoryLogger {
    fn emit(&self, level: Level, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}
