//! Structured log records and the builder that assembles them (v0.1)
//!
//! A [`Record`] is one finished line of structured output: a severity, an
//! ordered list of typed fields, and a human-readable message. Records
//! serialize with insertion order preserved (level first, message last),
//! which is why `Serialize` is written by hand instead of derived.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::event::DynError;
use crate::level::Level;
use crate::sink::LogSink;

/// One typed key/value pair attached to a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: &'static str,
    pub value: FieldValue,
}

impl Field {
    /// String field.
    pub fn str(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: FieldValue::Str(value.into()),
        }
    }

    /// String-list field.
    pub fn list(key: &'static str, values: impl Into<Vec<String>>) -> Self {
        Self {
            key,
            value: FieldValue::List(values.into()),
        }
    }

    /// Boolean field.
    pub fn bool(key: &'static str, value: bool) -> Self {
        Self {
            key,
            value: FieldValue::Bool(value),
        }
    }

    /// Error field, already rendered to its display form.
    pub fn err(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            value: FieldValue::Err(message.into()),
        }
    }
}

/// Value payload of a [`Field`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain string
    Str(String),
    /// Ordered list of strings (stack and module traces)
    List(Vec<String>),
    /// Boolean flag
    Bool(bool),
    /// Error message, kept distinct from `Str` so backends can route it
    Err(String),
}

/// One finished log record.
///
/// Built exactly once by [`RecordBuilder`], then handed to a sink and never
/// mutated again.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    pub message: String,
    pub fields: Vec<Field>,
}

impl Record {
    /// Look up a field value by key (first match wins).
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| &field.value)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let has_level = self.level != Level::NoLevel;
        let entries = self.fields.len() + 1 + usize::from(has_level);
        let mut map = serializer.serialize_map(Some(entries))?;
        if has_level {
            map.serialize_entry("level", self.level.as_str())?;
        }
        for field in &self.fields {
            match &field.value {
                FieldValue::Str(value) => map.serialize_entry(field.key, value)?,
                FieldValue::List(values) => map.serialize_entry(field.key, values)?,
                FieldValue::Bool(value) => map.serialize_entry(field.key, value)?,
                FieldValue::Err(message) => map.serialize_entry(field.key, message)?,
            }
        }
        map.serialize_entry("message", &self.message)?;
        map.end()
    }
}

impl fmt::Display for Record {
    /// Flattened single-line form: the message followed by `key=value`
    /// pairs. Used by backends that cannot carry structured fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for field in &self.fields {
            write!(f, " {}=", field.key)?;
            match &field.value {
                FieldValue::Str(value) | FieldValue::Err(value) => f.write_str(value)?,
                FieldValue::List(values) => write!(f, "[{}]", values.join(", "))?,
                FieldValue::Bool(value) => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

/// Fluent builder that assembles one [`Record`] and emits it to a sink.
///
/// Obtained from [`EventRenderer`](crate::EventRenderer)'s severity
/// selectors. The `maybe_*` helpers keep the omission rules in one place:
/// `maybe_str` skips empty strings, `maybe_bool` skips `false`, and `err`
/// skips absent errors. Lists are always attached, even when empty.
pub struct RecordBuilder<'a> {
    sink: &'a dyn LogSink,
    record: Record,
}

impl<'a> RecordBuilder<'a> {
    /// Start an empty record at the given severity.
    pub fn new(sink: &'a dyn LogSink, level: Level) -> Self {
        Self {
            sink,
            record: Record {
                level,
                message: String::new(),
                fields: Vec::new(),
            },
        }
    }

    /// Attach a string field unconditionally, empty values included.
    pub fn str(mut self, key: &'static str, value: impl AsRef<str>) -> Self {
        self.record.fields.push(Field::str(key, value.as_ref()));
        self
    }

    /// Attach a string field only when the value is non-empty.
    pub fn maybe_str(self, key: &'static str, value: impl AsRef<str>) -> Self {
        if value.as_ref().is_empty() {
            self
        } else {
            self.str(key, value)
        }
    }

    /// Attach a string-list field, empty lists included.
    pub fn strs(mut self, key: &'static str, values: &[String]) -> Self {
        self.record.fields.push(Field::list(key, values.to_vec()));
        self
    }

    /// Attach a boolean field unconditionally.
    pub fn bool(mut self, key: &'static str, value: bool) -> Self {
        self.record.fields.push(Field::bool(key, value));
        self
    }

    /// Attach a boolean field only when the value is `true`.
    pub fn maybe_bool(self, key: &'static str, value: bool) -> Self {
        if value {
            self.bool(key, value)
        } else {
            self
        }
    }

    /// Attach an `error` field when an error is present.
    pub fn err(mut self, err: Option<&DynError>) -> Self {
        if let Some(err) = err {
            self.record.fields.push(Field::err("error", err.to_string()));
        }
        self
    }

    /// Finish the record with its message and emit it to the sink.
    pub fn msg(mut self, message: impl Into<String>) {
        self.record.message = message.into();
        self.sink.emit(self.record);
    }
}
