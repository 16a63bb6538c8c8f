//! Error types and exception identity for the tracing layer.
//!
//! Uses `thiserror` for the tracer's own error type. Exceptions leaving a
//! traced method are ordinary `Err` values; [`FaultIdentity`] gives them an
//! identity that survives propagation so each one is logged exactly once.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use thiserror::Error as ThisError;

// =============================================================================
// Trace Error
// =============================================================================

/// Errors produced by the tracing layer itself.
///
/// Tracing is layered on top of already-running application code, so these
/// propagate through the traced method's own error type rather than being
/// swallowed.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum TraceError {
    /// The call context carried neither a receiver type nor a fallback scope,
    /// so no logger name could be resolved.
    #[error("cannot resolve a logger name: call context has no target and no fallback scope")]
    UnresolvedLogger,
}

// =============================================================================
// Fault Identity
// =============================================================================

/// An error whose identity is stable as the value propagates up the call
/// chain.
///
/// Rust errors are values, not heap instances, so a plain enum changes
/// address on every move. Implementations must return an identity tied to
/// something that survives the moves (typically a shared allocation, as in
/// [`SharedError`]). The tracer uses this identity to log an exception only
/// at the innermost frame that observes it.
pub trait FaultIdentity: Error {
    /// Returns the move-stable identity of this error.
    fn fault_identity(&self) -> usize;
}

/// A reference-counted error with move-stable identity.
///
/// Cloning shares the allocation, so clones carry the same identity and are
/// treated as the same exception instance by the tracer.
#[derive(Clone, Debug)]
pub struct SharedError(Arc<dyn Error + Send + Sync>);

impl SharedError {
    /// Wraps an error in a shared allocation.
    #[must_use]
    pub fn new(error: impl Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(error))
    }

    /// Creates a shared error from a plain message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(MessageError(message.into()))
    }
}

impl fmt::Display for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for SharedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl FaultIdentity for SharedError {
    fn fault_identity(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl From<TraceError> for SharedError {
    fn from(error: TraceError) -> Self {
        Self::new(error)
    }
}

/// A bare message promoted to an error.
#[derive(Debug, ThisError)]
#[error("{0}")]
struct MessageError(String);

// =============================================================================
// Error Chain Rendering
// =============================================================================

/// Renders an error and its `source()` chain as a single line.
///
/// This is the rendering attached to exception trace events, standing in for
/// a stack-trace dump.
#[must_use]
pub fn format_error_chain(error: &(dyn Error + 'static)) -> String {
    use std::fmt::Write;

    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(rendered, ": caused by: {cause}");
        source = cause.source();
    }
    rendered
}

// =============================================================================
// Tests
// =============================================================================
