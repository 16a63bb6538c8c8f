//! Crosscut - cross-cutting utilities for application code.
//!
//! This crate re-exports both utilities for convenient access. For detailed
//! documentation, see the individual crates.
//!
//! ```text
//! crosscut_trace  — Method-boundary tracing (entry, exit, exception)
//! crosscut_domain — Structural equality, hashing, and rendering
//! ```
//!
//! The two utilities share no runtime state: the tracer is driven by an
//! interception layer around designated calls, while domain objects are
//! exercised by ordinary equality, hashing, and debug-rendering code.

pub use crosscut_domain as domain;
pub use crosscut_trace as trace;
