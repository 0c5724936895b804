//! Lifecycle event vocabulary (v0.1)
//!
//! The closed set of notifications an application container emits while it
//! assembles and runs an application: supplying and providing values,
//! decorating and replacing them, invoking functions, executing start/stop
//! hooks, and winding the process up or down. Containers hand these to a
//! [`LifecycleLogger`](crate::LifecycleLogger); turning them into log
//! records is [`EventRenderer`](crate::EventRenderer)'s job.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

/// Error carried inside an event.
///
/// Errors travel as data here, attached to the event that observed them and
/// rendered as an `error` field. `Arc` keeps events cheap to clone and lets
/// the same error ride along several events (a failed start is reported by
/// `Started` and again by `RollingBack`).
pub type DynError = Arc<dyn Error + Send + Sync + 'static>;

/// A single step of the container lifecycle.
///
/// The enum is `#[non_exhaustive]`: containers may grow new steps over
/// time, and renderers drop variants they do not recognize instead of
/// failing.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum Event {
    // ═══════════════════════════════════════════════════════════
    // START/STOP HOOKS
    // ═══════════════════════════════════════════════════════════
    /// A start hook is about to run
    OnStartExecuting {
        /// Hook function being executed
        function_name: String,
        /// Constructor or component that registered the hook
        caller_name: String,
    },
    /// A start hook finished (successfully or not)
    OnStartExecuted {
        function_name: String,
        caller_name: String,
        /// Wall-clock time the hook took
        runtime: Duration,
        err: Option<DynError>,
    },
    /// A stop hook is about to run
    OnStopExecuting {
        function_name: String,
        caller_name: String,
    },
    /// A stop hook finished (successfully or not)
    OnStopExecuted {
        function_name: String,
        caller_name: String,
        runtime: Duration,
        err: Option<DynError>,
    },

    // ═══════════════════════════════════════════════════════════
    // GRAPH ASSEMBLY
    // ═══════════════════════════════════════════════════════════
    /// A value was supplied to the container directly
    Supplied {
        /// Type of the supplied value
        type_name: String,
        /// Module the value was supplied to, empty outside any module
        module_name: String,
        /// Call frames of the supply site
        stack_trace: Vec<String>,
        /// Module chain of the supply site
        module_trace: Vec<String>,
        err: Option<DynError>,
    },
    /// A constructor was registered
    Provided {
        /// Constructor being registered
        constructor_name: String,
        module_name: String,
        /// Types the constructor produces, one record is rendered per entry
        output_type_names: Vec<String>,
        stack_trace: Vec<String>,
        module_trace: Vec<String>,
        /// Whether the constructor is private to its module
        private: bool,
        err: Option<DynError>,
    },
    /// A previously provided value was replaced
    Replaced {
        module_name: String,
        output_type_names: Vec<String>,
        stack_trace: Vec<String>,
        module_trace: Vec<String>,
        err: Option<DynError>,
    },
    /// A decorator was registered on top of an existing value
    Decorated {
        /// Decorator being registered
        decorator_name: String,
        module_name: String,
        output_type_names: Vec<String>,
        stack_trace: Vec<String>,
        module_trace: Vec<String>,
        err: Option<DynError>,
    },

    // ═══════════════════════════════════════════════════════════
    // EXECUTION
    // ═══════════════════════════════════════════════════════════
    /// A constructor or supplied thunk was run to build a value
    Run {
        /// Name of the thing that ran
        name: String,
        /// What kind of thing ran ("constructor", "supply", ...)
        kind: String,
        module_name: String,
        runtime: Duration,
        err: Option<DynError>,
    },
    /// A function is about to be invoked
    Invoking {
        function_name: String,
        module_name: String,
    },
    /// A function invocation finished
    Invoked {
        function_name: String,
        module_name: String,
        /// Call trace of the invocation, may be empty
        trace: String,
        err: Option<DynError>,
    },

    // ═══════════════════════════════════════════════════════════
    // PROCESS LIFECYCLE
    // ═══════════════════════════════════════════════════════════
    /// An OS signal was received
    Stopping {
        /// Signal name as reported by the platform
        signal: String,
    },
    /// The container finished stopping
    Stopped { err: Option<DynError> },
    /// Startup failed and the container is unwinding completed hooks
    RollingBack {
        /// The startup error that triggered the rollback
        start_err: DynError,
    },
    /// The rollback finished
    RolledBack { err: Option<DynError> },
    /// The container finished starting
    Started { err: Option<DynError> },
    /// The host swapped in a custom logger for lifecycle events
    LoggerInitialized {
        /// Constructor that built the logger
        constructor_name: String,
        err: Option<DynError>,
    },
}
