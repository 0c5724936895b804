//! JSON-line sink (v0.1)
//!
//! Serializes each record as one JSON object per line, the native form of
//! line-oriented structured logging backends. Key order is fixed: `level`
//! first (omitted for `NoLevel` records), event fields in attachment order,
//! `message` last.

use std::io::{self, Write};

use parking_lot::Mutex;

use crate::level::Level;
use crate::record::Record;
use crate::sink::LogSink;

/// Sink that writes one JSON object per record per line.
///
/// Writes are best-effort: a record that fails to serialize or a writer
/// that fails to accept the line is dropped silently. The writer is flushed
/// after every line.
pub struct JsonSink<W: Write + Send> {
    writer: Mutex<W>,
    threshold: Level,
}

impl<W: Write + Send> JsonSink<W> {
    /// Sink over an arbitrary writer, passing every record through.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            threshold: Level::Trace,
        }
    }

    /// Restrict output to records visible at `threshold`.
    pub fn with_level(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Take the writer back, discarding the sink.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonSink<io::Stderr> {
    /// Sink over standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl JsonSink<io::Stdout> {
    /// Sink over standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LogSink for JsonSink<W> {
    fn emit(&self, record: Record) {
        if !record.level.visible_at(self.threshold) {
            return;
        }
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(_) => return,
        };
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}
