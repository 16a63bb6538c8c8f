//! Integration tests for the method tracer.
//!
//! Tests entry/exit/exception logging, value description, and the
//! diagnostic-context stack through the public API.

mod describe;
