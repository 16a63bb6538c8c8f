//! Thread-local diagnostic-context stack.
//!
//! A per-thread stack of markers used purely for visual nesting of trace
//! lines: the tracer pushes one marker per entered call and pops it on the
//! way out, and sinks prepend [`prefix`] when rendering. Each thread has its
//! own stack, so concurrent call chains do not interleave their indentation.

use std::cell::RefCell;

thread_local! {
    static STACK: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

/// Pushes a marker onto the current thread's stack.
pub fn push(marker: &'static str) {
    STACK.with(|stack| stack.borrow_mut().push(marker));
}

/// Pops the most recent marker. Popping an empty stack is a no-op.
pub fn pop() -> Option<&'static str> {
    STACK.with(|stack| stack.borrow_mut().pop())
}

/// Returns the current nesting depth.
#[must_use]
pub fn depth() -> usize {
    STACK.with(|stack| stack.borrow().len())
}

/// Returns the concatenated markers, oldest first.
#[must_use]
pub fn prefix() -> String {
    STACK.with(|stack| stack.borrow().concat())
}

// =============================================================================
// Tests
// =============================================================================
