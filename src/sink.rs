//! Sink seam between the renderer and logging backends (v0.1)
//!
//! The renderer builds records; a [`LogSink`] decides what happens to them.
//! Backends apply their own visibility threshold, so a single renderer can
//! feed sinks with different verbosity.

use std::fmt;

use parking_lot::Mutex;

use crate::level::Level;
use crate::record::Record;

/// Receiving end for finished records.
///
/// `emit` takes the record by value and must not panic; a sink that cannot
/// write (closed file, poisoned pipe) drops the record instead.
pub trait LogSink: Send + Sync {
    /// Consume one finished record.
    fn emit(&self, record: Record);
}

/// In-memory sink that captures records for later inspection.
///
/// The observable backend used throughout the test suites: every record
/// visible at the capture threshold (default `Trace`, i.e. everything) is
/// appended to an internal list. Thread-safe; append order is capture
/// order.
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
    threshold: Level,
}

impl MemorySink {
    /// Sink that captures every record.
    pub fn new() -> Self {
        Self::with_level(Level::Trace)
    }

    /// Sink that captures only records visible at `threshold`.
    pub fn with_level(threshold: Level) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            threshold,
        }
    }

    /// Snapshot of the captured records, in capture order.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Drain the captured records, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: Record) {
        if record.level.visible_at(self.threshold) {
            self.records.lock().push(record);
        }
    }
}

impl fmt::Debug for MemorySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySink")
            .field("threshold", &self.threshold)
            .field("len", &self.len())
            .finish()
    }
}
