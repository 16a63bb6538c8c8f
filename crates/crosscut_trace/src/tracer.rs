//! The method tracer: entry, exit, and exception logging.
//!
//! [`Tracer`] implements the [`Interceptor`] trigger contract. An
//! interception layer (or the [`Tracer::call`] / [`Tracer::call_unit`]
//! combinators, which compose the hooks around a closure at the call site)
//! fires the hooks at three points: before the body runs, after a normal
//! return, and when an error leaves the call.
//!
//! All three hooks check the sink's enabled guard before doing any work, so
//! a disabled sink costs one logger resolution and one boolean check per
//! hook.

use std::fmt::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::context::CallContext;
use crate::describe::Describe;
use crate::error::{FaultIdentity, TraceError};
use crate::ndc;
use crate::sink::{TraceSink, TracingSink};

/// The indentation marker pushed per entered call.
const INDENT_MARKER: &str = " ";

/// Sentinel for "no exception logged yet". Shared allocations are never at
/// address zero, so no real identity collides with it.
const NO_FAULT: usize = 0;

// =============================================================================
// Hook Payloads
// =============================================================================

/// The outcome of a successful traced call.
#[derive(Clone, Copy)]
pub enum Return<'a> {
    /// The method returns nothing; the exit line carries no returned clause.
    Unit,
    /// The method returned a value.
    Value(&'a dyn Describe),
}

/// An error propagating out of a traced call.
#[derive(Clone, Copy)]
pub struct Fault<'a> {
    /// Move-stable identity of the error instance, from [`FaultIdentity`].
    pub identity: usize,
    /// The error itself.
    pub error: &'a (dyn std::error::Error + 'static),
}

impl<'a> Fault<'a> {
    /// Creates a fault from an identity and an error reference.
    #[must_use]
    pub fn new(identity: usize, error: &'a (dyn std::error::Error + 'static)) -> Self {
        Self { identity, error }
    }

    /// Creates a fault from an error with its own identity.
    #[must_use]
    pub fn of<E: FaultIdentity + 'static>(error: &'a E) -> Self {
        Self::new(error.fault_identity(), error)
    }
}

// =============================================================================
// Interceptor
// =============================================================================

/// The trigger contract fired around every traced call.
///
/// The host interception layer must fire `on_entry` before the body,
/// `on_normal_return` after a successful return, and `on_exception` when an
/// error leaves the call. The tracer itself must not be within the traced
/// scope.
pub trait Interceptor {
    /// Fires before the target method body executes.
    fn on_entry(&self, ctx: &CallContext<'_>) -> Result<(), TraceError>;

    /// Fires after a successful return.
    fn on_normal_return(&self, ctx: &CallContext<'_>, returned: Return<'_>)
    -> Result<(), TraceError>;

    /// Fires when an error leaves the target method.
    fn on_exception(&self, ctx: &CallContext<'_>, fault: &Fault<'_>) -> Result<(), TraceError>;
}

// =============================================================================
// Tracer
// =============================================================================

/// Logs entry, exit, and first-seen exception events for traced calls.
///
/// The duplicate-exception slot is shared across every call through the
/// tracer and read without synchronization guarantees beyond atomicity:
/// under concurrent call chains suppression may be spuriously applied or
/// missed. Tracing is a best-effort diagnostic, not a correctness path.
pub struct Tracer<S: TraceSink> {
    sink: S,
    last_fault: AtomicUsize,
}

impl<S: TraceSink> Tracer<S> {
    /// Creates a tracer writing to the given sink.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            last_fault: AtomicUsize::new(NO_FAULT),
        }
    }

    /// Returns the underlying sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs a value-returning closure with entry/exit/exception tracing.
    ///
    /// Tracing failures propagate through the closure's own error type, so
    /// tracing stays transparent without suppressing real application
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or a converted [`TraceError`] if the
    /// logger name cannot be resolved.
    pub fn call<T, E, F>(&self, ctx: &CallContext<'_>, f: F) -> Result<T, E>
    where
        T: Describe,
        E: FaultIdentity + From<TraceError> + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        self.on_entry(ctx)?;
        match f() {
            Ok(value) => {
                self.on_normal_return(ctx, Return::Value(&value))?;
                Ok(value)
            }
            Err(error) => {
                self.on_exception(ctx, &Fault::of(&error))?;
                Err(error)
            }
        }
    }

    /// Runs a unit-returning closure with entry/exit/exception tracing.
    ///
    /// The exit line carries no returned clause.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or a converted [`TraceError`] if the
    /// logger name cannot be resolved.
    pub fn call_unit<E, F>(&self, ctx: &CallContext<'_>, f: F) -> Result<(), E>
    where
        E: FaultIdentity + From<TraceError> + 'static,
        F: FnOnce() -> Result<(), E>,
    {
        self.on_entry(ctx)?;
        match f() {
            Ok(()) => {
                self.on_normal_return(ctx, Return::Unit)?;
                Ok(())
            }
            Err(error) => {
                self.on_exception(ctx, &Fault::of(&error))?;
                Err(error)
            }
        }
    }

    fn message_head(kind: &str, logger: &str, ctx: &CallContext<'_>) -> String {
        format!(
            "{kind} at {logger}.{}({}:{}) ",
            ctx.method, ctx.file, ctx.line
        )
    }
}

impl Tracer<TracingSink> {
    /// Creates a tracer writing through the `tracing` crate.
    #[must_use]
    pub fn tracing() -> Self {
        Self::new(TracingSink)
    }
}

impl<S: TraceSink + Default> Default for Tracer<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: TraceSink> Interceptor for Tracer<S> {
    fn on_entry(&self, ctx: &CallContext<'_>) -> Result<(), TraceError> {
        let logger = ctx.logger_name()?;
        if !self.sink.trace_enabled(logger) {
            return Ok(());
        }

        let mut message = Self::message_head("Entry", logger, ctx);
        for (i, arg) in ctx.args.iter().enumerate() {
            if i != 0 {
                message.push_str(", ");
            }
            let _ = write!(message, "arg[{i}] {}", arg.describe());
        }

        self.sink.trace(logger, &message);
        ndc::push(INDENT_MARKER);
        Ok(())
    }

    fn on_normal_return(
        &self,
        ctx: &CallContext<'_>,
        returned: Return<'_>,
    ) -> Result<(), TraceError> {
        let logger = ctx.logger_name()?;
        if !self.sink.trace_enabled(logger) {
            return Ok(());
        }

        ndc::pop();

        let mut message = Self::message_head(" Exit", logger, ctx);
        if let Return::Value(value) = returned {
            let _ = write!(message, "returned {}", value.describe());
        }

        self.sink.trace(logger, &message);
        Ok(())
    }

    fn on_exception(&self, ctx: &CallContext<'_>, fault: &Fault<'_>) -> Result<(), TraceError> {
        let logger = ctx.logger_name()?;
        if !self.sink.trace_enabled(logger) {
            return Ok(());
        }

        // Only log an exception instance at its origin; re-throws up the
        // chain see the same identity and are skipped.
        if fault.identity == self.last_fault.load(Ordering::Relaxed) {
            return Ok(());
        }
        self.last_fault.store(fault.identity, Ordering::Relaxed);

        let message = Self::message_head("Exception", logger, ctx);
        self.sink.trace_error(logger, &message, fault.error);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
