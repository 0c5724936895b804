//! Lifecycle event rendering (v0.1)
//!
//! One fixed mapping from each [`Event`] variant to a message, a field set,
//! and a severity. Rendering is synchronous and infallible: every event
//! becomes zero or more records on the way to the sink, and nothing here
//! panics or returns an error.

use std::sync::Arc;

use crate::event::Event;
use crate::level::Level;
use crate::record::RecordBuilder;
use crate::sink::LogSink;

/// Receiving end for container lifecycle events.
///
/// The container calls [`log_event`](Self::log_event) for every step it
/// takes. Implementations decide what, if anything, to do with the event;
/// they must not panic and must tolerate variants they do not know.
pub trait LifecycleLogger: Send + Sync {
    /// Handle one lifecycle event.
    fn log_event(&self, event: &Event);
}

/// Logger that discards every event.
///
/// The default when a host wants a silent container.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl LifecycleLogger for NopLogger {
    fn log_event(&self, _event: &Event) {}
}

/// Renders lifecycle events as structured records into a [`LogSink`].
///
/// Severity is resolved per record, not per event: records describing a
/// failure use the error level (default [`Level::Error`]), everything else
/// uses the log level (default [`Level::Info`]). The two levels move
/// independently, so a host can keep routine chatter at `debug` while
/// failures stay at `error`.
pub struct EventRenderer {
    sink: Arc<dyn LogSink>,
    log_level: Level,
    error_level: Option<Level>,
}

impl EventRenderer {
    /// Renderer over `sink` with the default severities.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            log_level: Level::Info,
            error_level: None,
        }
    }

    /// Severity for non-error records.
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Severity for error records, overriding the [`Level::Error`] default.
    pub fn with_error_level(mut self, level: Level) -> Self {
        self.error_level = Some(level);
        self
    }

    /// Change the severity of non-error records.
    pub fn set_log_level(&mut self, level: Level) {
        self.log_level = level;
    }

    /// Change the severity of error records.
    pub fn set_error_level(&mut self, level: Level) {
        self.error_level = Some(level);
    }

    fn record(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self.sink.as_ref(), self.log_level)
    }

    fn error_record(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self.sink.as_ref(), self.error_level.unwrap_or(Level::Error))
    }

    /// Render one event.
    ///
    /// Provide, replace, and decorate events fan out into one record per
    /// output type, plus a trailing error record when the event carries an
    /// error. Every other variant renders at most one record.
    pub fn log_event(&self, event: &Event) {
        match event {
            Event::OnStartExecuting {
                function_name,
                caller_name,
            } => {
                self.record()
                    .str("callee", function_name)
                    .str("caller", caller_name)
                    .msg("OnStart hook executing");
            }
            Event::OnStartExecuted {
                function_name,
                caller_name,
                runtime,
                err,
            } => {
                if let Some(err) = err {
                    self.error_record()
                        .str("callee", function_name)
                        .str("caller", caller_name)
                        .err(Some(err))
                        .msg("OnStart hook failed");
                } else {
                    self.record()
                        .str("callee", function_name)
                        .str("caller", caller_name)
                        .str("runtime", format!("{:?}", runtime))
                        .msg("OnStart hook executed");
                }
            }
            Event::OnStopExecuting {
                function_name,
                caller_name,
            } => {
                self.record()
                    .str("callee", function_name)
                    .str("caller", caller_name)
                    .msg("OnStop hook executing");
            }
            Event::OnStopExecuted {
                function_name,
                caller_name,
                runtime,
                err,
            } => {
                if let Some(err) = err {
                    self.error_record()
                        .str("callee", function_name)
                        .str("caller", caller_name)
                        .err(Some(err))
                        .msg("OnStop hook failed");
                } else {
                    self.record()
                        .str("callee", function_name)
                        .str("caller", caller_name)
                        .str("runtime", format!("{:?}", runtime))
                        .msg("OnStop hook executed");
                }
            }
            Event::Supplied {
                type_name,
                module_name,
                stack_trace,
                module_trace,
                err,
            } => {
                if let Some(err) = err {
                    self.error_record()
                        .str("type", type_name)
                        .strs("stacktrace", stack_trace)
                        .strs("moduletrace", module_trace)
                        .maybe_str("module", module_name)
                        .err(Some(err))
                        .msg("error encountered while applying options");
                } else {
                    self.record()
                        .str("type", type_name)
                        .strs("stacktrace", stack_trace)
                        .strs("moduletrace", module_trace)
                        .maybe_str("module", module_name)
                        .msg("supplied");
                }
            }
            Event::Provided {
                constructor_name,
                module_name,
                output_type_names,
                stack_trace,
                module_trace,
                private,
                err,
            } => {
                for type_name in output_type_names {
                    self.record()
                        .str("constructor", constructor_name)
                        .strs("stacktrace", stack_trace)
                        .strs("moduletrace", module_trace)
                        .maybe_str("module", module_name)
                        .str("type", type_name)
                        .maybe_bool("private", *private)
                        .msg("provided");
                }
                if let Some(err) = err {
                    self.error_record()
                        .strs("stacktrace", stack_trace)
                        .strs("moduletrace", module_trace)
                        .err(Some(err))
                        .msg("error encountered while applying options");
                }
            }
            Event::Replaced {
                module_name,
                output_type_names,
                stack_trace,
                module_trace,
                err,
            } => {
                for type_name in output_type_names {
                    self.record()
                        .strs("stacktrace", stack_trace)
                        .strs("moduletrace", module_trace)
                        .maybe_str("module", module_name)
                        .str("type", type_name)
                        .msg("replaced");
                }
                if let Some(err) = err {
                    self.error_record()
                        .strs("stacktrace", stack_trace)
                        .strs("moduletrace", module_trace)
                        .maybe_str("module", module_name)
                        .err(Some(err))
                        .msg("error encountered while replacing");
                }
            }
            Event::Decorated {
                decorator_name,
                module_name,
                output_type_names,
                stack_trace,
                module_trace,
                err,
            } => {
                for type_name in output_type_names {
                    self.record()
                        .str("decorator", decorator_name)
                        .strs("stacktrace", stack_trace)
                        .strs("moduletrace", module_trace)
                        .maybe_str("module", module_name)
                        .str("type", type_name)
                        .msg("decorated");
                }
                if let Some(err) = err {
                    self.error_record()
                        .strs("stacktrace", stack_trace)
                        .strs("moduletrace", module_trace)
                        .maybe_str("module", module_name)
                        .err(Some(err))
                        .msg("error encountered while applying options");
                }
            }
            Event::Run {
                name,
                kind,
                module_name,
                runtime,
                err,
            } => {
                if let Some(err) = err {
                    self.error_record()
                        .str("name", name)
                        .str("kind", kind)
                        .maybe_str("module", module_name)
                        .err(Some(err))
                        .msg("error returned");
                } else {
                    self.record()
                        .str("name", name)
                        .str("kind", kind)
                        .str("runtime", format!("{:?}", runtime))
                        .maybe_str("module", module_name)
                        .msg("run");
                }
            }
            Event::Invoking {
                function_name,
                module_name,
            } => {
                // The call stack is omitted here to keep routine logs short.
                self.record()
                    .str("function", function_name)
                    .maybe_str("module", module_name)
                    .msg("invoking");
            }
            Event::Invoked {
                function_name,
                module_name,
                trace,
                err,
            } => {
                if let Some(err) = err {
                    self.error_record()
                        .err(Some(err))
                        .str("stack", trace)
                        .str("function", function_name)
                        .maybe_str("module", module_name)
                        .msg("invoke failed");
                }
            }
            Event::Stopping { signal } => {
                self.record()
                    .str("signal", signal.to_uppercase())
                    .msg("received signal");
            }
            Event::Stopped { err } => {
                if let Some(err) = err {
                    self.error_record().err(Some(err)).msg("stop failed");
                }
            }
            Event::RollingBack { start_err } => {
                self.error_record()
                    .err(Some(start_err))
                    .msg("start failed, rolling back");
            }
            Event::RolledBack { err } => {
                if let Some(err) = err {
                    self.error_record().err(Some(err)).msg("rollback failed");
                }
            }
            Event::Started { err } => {
                if let Some(err) = err {
                    self.error_record().err(Some(err)).msg("start failed");
                } else {
                    self.record().msg("started");
                }
            }
            Event::LoggerInitialized {
                constructor_name,
                err,
            } => {
                if let Some(err) = err {
                    self.error_record()
                        .err(Some(err))
                        .msg("custom logger initialization failed");
                } else {
                    self.record()
                        .str("function", constructor_name)
                        .msg("initialized custom logger");
                }
            }
            // Variants added after this renderer was built are dropped.
            #[allow(unreachable_patterns)]
            _ => {}
        }
    }
}

impl LifecycleLogger for EventRenderer {
    fn log_event(&self, event: &Event) {
        EventRenderer::log_event(self, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DynError;
    use crate::sink::MemorySink;
    use std::time::Duration;

    fn some_error() -> DynError {
        Arc::new(std::io::Error::other("some error"))
    }

    fn renderer(sink: &Arc<MemorySink>) -> EventRenderer {
        EventRenderer::new(sink.clone())
    }

    #[test]
    fn non_error_records_default_to_info() {
        let sink = Arc::new(MemorySink::new());
        renderer(&sink).log_event(&Event::Started { err: None });

        assert_eq!(sink.records()[0].level, Level::Info);
    }

    #[test]
    fn error_records_default_to_error() {
        let sink = Arc::new(MemorySink::new());
        renderer(&sink).log_event(&Event::Started {
            err: Some(some_error()),
        });

        assert_eq!(sink.records()[0].level, Level::Error);
    }

    #[test]
    fn log_level_moves_non_error_records_only() {
        let sink = Arc::new(MemorySink::new());
        let renderer = renderer(&sink).with_log_level(Level::Debug);

        renderer.log_event(&Event::Started { err: None });
        renderer.log_event(&Event::Started {
            err: Some(some_error()),
        });

        let records = sink.records();
        assert_eq!(records[0].level, Level::Debug);
        assert_eq!(records[1].level, Level::Error);
    }

    #[test]
    fn error_level_moves_error_records_only() {
        let sink = Arc::new(MemorySink::new());
        let renderer = renderer(&sink).with_error_level(Level::Warn);

        renderer.log_event(&Event::Started { err: None });
        renderer.log_event(&Event::Started {
            err: Some(some_error()),
        });

        let records = sink.records();
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[1].level, Level::Warn);
    }

    #[test]
    fn setters_change_levels_after_construction() {
        let sink = Arc::new(MemorySink::new());
        let mut renderer = renderer(&sink);
        renderer.set_log_level(Level::Trace);
        renderer.set_error_level(Level::Fatal);

        renderer.log_event(&Event::Started { err: None });
        renderer.log_event(&Event::Stopped {
            err: Some(some_error()),
        });

        let records = sink.records();
        assert_eq!(records[0].level, Level::Trace);
        assert_eq!(records[1].level, Level::Fatal);
    }

    #[test]
    fn rolling_back_always_uses_the_error_level() {
        let sink = Arc::new(MemorySink::new());
        renderer(&sink).log_event(&Event::RollingBack {
            start_err: some_error(),
        });

        let records = sink.records();
        assert_eq!(records[0].level, Level::Error);
        assert_eq!(records[0].message, "start failed, rolling back");
    }

    #[test]
    fn error_only_variants_are_silent_on_success() {
        let sink = Arc::new(MemorySink::new());
        let renderer = renderer(&sink);

        renderer.log_event(&Event::Invoked {
            function_name: "boot".to_string(),
            module_name: String::new(),
            trace: String::new(),
            err: None,
        });
        renderer.log_event(&Event::Stopped { err: None });
        renderer.log_event(&Event::RolledBack { err: None });

        assert!(sink.is_empty());
    }

    #[test]
    fn empty_attributes_still_render() {
        let sink = Arc::new(MemorySink::new());
        renderer(&sink).log_event(&Event::OnStartExecuting {
            function_name: String::new(),
            caller_name: String::new(),
        });

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields.len(), 2);
    }

    #[test]
    fn runtime_renders_in_compact_duration_form() {
        let sink = Arc::new(MemorySink::new());
        renderer(&sink).log_event(&Event::OnStartExecuted {
            function_name: "hook.on_start".to_string(),
            caller_name: "cache.new_client".to_string(),
            runtime: Duration::from_millis(3),
            err: None,
        });

        assert_eq!(
            sink.records()[0].field("runtime"),
            Some(&crate::record::FieldValue::Str("3ms".to_string()))
        );
    }

    #[test]
    fn works_as_a_trait_object() {
        fn log_through(logger: &dyn LifecycleLogger, event: &Event) {
            logger.log_event(event);
        }

        let sink = Arc::new(MemorySink::new());
        let renderer = renderer(&sink);
        log_through(&renderer, &Event::Started { err: None });
        log_through(&NopLogger, &Event::Started { err: None });

        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn shared_renderer_logs_from_many_threads() {
        let sink = Arc::new(MemorySink::new());
        let renderer = Arc::new(renderer(&sink));
        let mut handles = Vec::new();

        for _ in 0..4 {
            let renderer = renderer.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..50 {
                    renderer.log_event(&Event::Started { err: None });
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 200);
    }

    #[test]
    fn renderer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EventRenderer>();
        assert_send_sync::<NopLogger>();
    }
}
