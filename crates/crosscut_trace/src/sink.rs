//! Trace sinks: where trace lines go.
//!
//! The tracer writes through the [`TraceSink`] contract: an enabled query
//! (checked before any message is built), a plain write, and a write with an
//! associated error. [`TracingSink`] is the production implementation backed
//! by the `tracing` crate; [`BufferSink`] records entries in memory for
//! tests and embedded capture.

use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::format_error_chain;
use crate::ndc;

// =============================================================================
// Trace Sink
// =============================================================================

/// A named-logger sink with a trace severity level.
///
/// `logger` is the resolved logger name for the traced call, normally the
/// receiver's fully-qualified type name. Implementations are responsible for
/// rendering the diagnostic-context prefix ([`ndc::prefix`]) so that nested
/// calls indent visually.
pub trait TraceSink {
    /// Returns whether trace output is enabled for the given logger.
    ///
    /// When this returns `false` the tracer does no further work: no
    /// argument rendering, no allocation, no diagnostic-context mutation.
    fn trace_enabled(&self, logger: &str) -> bool;

    /// Writes a trace message.
    fn trace(&self, logger: &str, message: &str);

    /// Writes a trace message with an associated error.
    fn trace_error(&self, logger: &str, message: &str, error: &(dyn Error + 'static));
}

// =============================================================================
// Tracing Sink
// =============================================================================

/// The production sink, backed by the `tracing` crate.
///
/// `tracing` targets are compile-time constants, so the enabled query is
/// answered at TRACE level for this crate's target and the logger name rides
/// along as a field. Per-logger granularity is available through custom
/// [`TraceSink`] implementations.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn trace_enabled(&self, _logger: &str) -> bool {
        tracing::enabled!(tracing::Level::TRACE)
    }

    fn trace(&self, logger: &str, message: &str) {
        tracing::trace!(logger, "{}{}", ndc::prefix(), message);
    }

    fn trace_error(&self, logger: &str, message: &str, error: &(dyn Error + 'static)) {
        tracing::trace!(
            logger,
            error = %format_error_chain(error),
            "{}{}",
            ndc::prefix(),
            message
        );
    }
}

// =============================================================================
// Buffer Sink
// =============================================================================

/// One captured trace line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// The resolved logger name.
    pub logger: String,
    /// The rendered message, including the diagnostic-context prefix.
    pub message: String,
    /// The rendered error chain, for exception entries.
    pub error: Option<String>,
}

/// An in-memory sink that records every emitted trace entry.
///
/// Clones share the same buffer and enabled flag, so a clone can be handed
/// to a tracer while the original is used for inspection.
#[derive(Clone, Debug)]
pub struct BufferSink {
    enabled: Arc<AtomicBool>,
    entries: Arc<Mutex<Vec<TraceEntry>>>,
}

impl BufferSink {
    /// Creates a sink with trace output enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self::with_enabled(true)
    }

    /// Creates a sink with trace output disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::with_enabled(false)
    }

    fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Enables or disables trace output.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Returns a snapshot of the captured entries.
    #[must_use]
    pub fn entries(&self) -> Vec<TraceEntry> {
        self.lock().clone()
    }

    /// Returns the captured messages, in emission order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.message.clone()).collect()
    }

    /// Returns the number of captured entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether no entries have been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards all captured entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TraceEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, logger: &str, message: &str, error: Option<String>) {
        self.lock().push(TraceEntry {
            logger: logger.to_string(),
            message: format!("{}{}", ndc::prefix(), message),
            error,
        });
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::disabled()
    }
}

impl TraceSink for BufferSink {
    fn trace_enabled(&self, _logger: &str) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn trace(&self, logger: &str, message: &str) {
        self.record(logger, message, None);
    }

    fn trace_error(&self, logger: &str, message: &str, error: &(dyn Error + 'static)) {
        self.record(logger, message, Some(format_error_chain(error)));
    }
}

// =============================================================================
// Tests
// =============================================================================
