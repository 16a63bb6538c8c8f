//! Method-boundary tracing for application code.
//!
//! This crate provides:
//! - [`Tracer`] - Entry, exit, and exception logging around traced calls
//! - [`Interceptor`] - The trigger contract fired by an interception layer
//! - [`CallContext`] - The join-point view of one invocation
//! - [`Describe`] - Type/value rendering for arguments and return values
//! - [`TraceSink`] - The logging sink contract, with `tracing`-backed and
//!   in-memory implementations
//! - [`ndc`] - The thread-local diagnostic-context stack for visual nesting

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod describe;
pub mod error;
pub mod ndc;
pub mod sink;
pub mod tracer;

pub use context::CallContext;
pub use describe::{Describe, ValueDesc, simple_type_name};
pub use error::{FaultIdentity, SharedError, TraceError, format_error_chain};
pub use sink::{BufferSink, TraceEntry, TraceSink, TracingSink};
pub use tracer::{Fault, Interceptor, Return, Tracer};
