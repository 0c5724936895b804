//! Lantern - structured logging for application container lifecycle events
//!
//! An application container reports every step it takes while assembling
//! and running an application: supplying and providing values, decorating
//! and replacing them, invoking functions, executing start and stop hooks,
//! rolling back after a failed start. Each step arrives as an [`Event`];
//! [`EventRenderer`] turns it into one structured log record (message,
//! typed fields, severity) and hands it to a pluggable [`LogSink`].
//!
//! Severity is split in two: routine records use the log level (default
//! [`Level::Info`]), records describing failures use the error level
//! (default [`Level::Error`]). Sinks apply their own threshold on top, so
//! rendering and filtering stay independent.
//!
//! ```
//! use std::sync::Arc;
//! use lantern::{Event, EventRenderer, Level, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let renderer = EventRenderer::new(sink.clone()).with_log_level(Level::Debug);
//!
//! renderer.log_event(&Event::OnStartExecuting {
//!     function_name: "hook.on_start".to_string(),
//!     caller_name: "cache.new_client".to_string(),
//! });
//!
//! let records = sink.take_all();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].message, "OnStart hook executing");
//! assert_eq!(records[0].level, Level::Debug);
//! ```

pub mod event;
pub mod json_sink;
pub mod level;
pub mod record;
pub mod renderer;
pub mod sink;
pub mod tracing_sink;

pub use event::{DynError, Event};
pub use json_sink::JsonSink;
pub use level::{Level, ParseLevelError};
pub use record::{Field, FieldValue, Record, RecordBuilder};
pub use renderer::{EventRenderer, LifecycleLogger, NopLogger};
pub use sink::{LogSink, MemorySink};
pub use tracing_sink::TracingSink;
