//! Bridge sink into the `tracing` ecosystem
//!
//! Hosts that already run a `tracing` subscriber can route lifecycle
//! records through it instead of opening a second output. `tracing`
//! callsites need field names at compile time, so the record travels in its
//! flattened [`Display`](std::fmt::Display) form rather than as individual
//! fields.

use crate::level::Level;
use crate::record::Record;
use crate::sink::LogSink;

/// Sink that forwards records to the `tracing` macros.
///
/// Level mapping: the five ordinary levels map one-to-one; `Fatal` and
/// `Panic` collapse to `error` (the strongest level `tracing` has);
/// `NoLevel` forwards at `info`; `Disabled` records are dropped. Threshold
/// filtering is left to the subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a bridge sink.
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn emit(&self, record: Record) {
        match record.level {
            Level::Trace => tracing::trace!(target: "lantern", "{}", record),
            Level::Debug => tracing::debug!(target: "lantern", "{}", record),
            Level::Info | Level::NoLevel => tracing::info!(target: "lantern", "{}", record),
            Level::Warn => tracing::warn!(target: "lantern", "{}", record),
            Level::Error | Level::Fatal | Level::Panic => {
                tracing::error!(target: "lantern", "{}", record)
            }
            Level::Disabled => {}
        }
    }
}
