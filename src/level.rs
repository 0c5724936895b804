//! Severity levels for rendered log records (v0.1)
//!
//! The ordered level set of line-oriented structured loggers: trace < debug
//! < info < warn < error < fatal < panic, plus two sentinels (`NoLevel`,
//! `Disabled`) that sit above the ordinary levels and get special treatment
//! in [`Level::visible_at`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity attached to a [`Record`](crate::Record).
///
/// Declaration order is the threshold order, so the derived `Ord` makes
/// `level >= threshold` the visibility test for the seven ordinary levels.
/// The sentinels ride on the same ordering: `NoLevel` outranks every
/// ordinary level and `Disabled` outranks everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Verbose tracing of internal steps
    Trace,
    /// Debugging detail
    Debug,
    /// Routine informational records (the default)
    #[default]
    Info,
    /// Unexpected but recoverable conditions
    Warn,
    /// A failed operation
    Error,
    /// A failure the process cannot continue from
    Fatal,
    /// A failure that should abort loudly
    Panic,
    /// Record carries no severity of its own; serialized without a level key
    #[serde(rename = "")]
    NoLevel,
    /// Suppresses the record (or, as a threshold, the whole sink)
    Disabled,
}

impl Level {
    /// Lowercase name as it appears in serialized records.
    ///
    /// `NoLevel` has no name and returns the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
            Level::NoLevel => "",
            Level::Disabled => "disabled",
        }
    }

    /// Whether a record at `self` passes a sink threshold.
    ///
    /// `Disabled` on either side suppresses the record. `NoLevel` records
    /// pass every threshold short of `Disabled`; a `NoLevel` threshold
    /// admits only `NoLevel` records.
    pub fn visible_at(self, threshold: Level) -> bool {
        if self == Level::Disabled || threshold == Level::Disabled {
            return false;
        }
        self >= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name does not match any known level.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown level name: {name:?}")]
pub struct ParseLevelError {
    name: String,
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "panic" => Ok(Level::Panic),
            "" => Ok(Level::NoLevel),
            "disabled" => Ok(Level::Disabled),
            other => Err(ParseLevelError {
                name: other.to_string(),
            }),
        }
    }
}
