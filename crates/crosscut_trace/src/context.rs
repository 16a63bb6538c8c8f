//! Call contexts: the join-point view handed to the tracer.
//!
//! A [`CallContext`] carries everything the tracer needs about one method
//! invocation: the receiver's type name (absent for free functions), the
//! method name, the static source location, and the arguments. Arguments are
//! held as [`Describe`] references and only rendered once the sink's enabled
//! guard has passed.

use crate::describe::Describe;
use crate::error::TraceError;

// =============================================================================
// Call Context
// =============================================================================

/// The runtime view of a single traced invocation.
///
/// Normally built by the [`call_context!`](crate::call_context) macro, which
/// fills in the source location and the fallback scope. Fields are public so
/// interception layers can construct contexts directly.
#[derive(Clone, Copy)]
pub struct CallContext<'a> {
    /// Fully-qualified type name of the receiver, or `None` for free and
    /// associated-function calls.
    pub target: Option<&'static str>,
    /// Fallback logger name used when there is no receiver, normally the
    /// call site's module path.
    pub scope: Option<&'static str>,
    /// The method name.
    pub method: &'static str,
    /// Source file of the call site.
    pub file: &'static str,
    /// Source line of the call site.
    pub line: u32,
    /// Declared argument values in call order.
    pub args: &'a [&'a dyn Describe],
}

impl<'a> CallContext<'a> {
    /// Creates a context with no receiver and no fallback scope.
    #[must_use]
    pub fn new(
        method: &'static str,
        file: &'static str,
        line: u32,
        args: &'a [&'a dyn Describe],
    ) -> Self {
        Self {
            target: None,
            scope: None,
            method,
            file,
            line,
            args,
        }
    }

    /// Sets the receiver's type name.
    #[must_use]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the receiver's type name from a receiver reference.
    #[must_use]
    pub fn with_target_of<T: ?Sized>(self, _receiver: &T) -> Self {
        self.with_target(std::any::type_name::<T>())
    }

    /// Sets the fallback logger name.
    #[must_use]
    pub fn with_scope(mut self, scope: &'static str) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Resolves the logger name for this invocation.
    ///
    /// The receiver's type name wins; without a receiver the fallback scope
    /// is used. A context carrying neither is an error, which propagates to
    /// the traced method's caller.
    pub fn logger_name(&self) -> Result<&'static str, TraceError> {
        self.target
            .or(self.scope)
            .ok_or(TraceError::UnresolvedLogger)
    }
}

/// Builds a [`CallContext`] at the call site.
///
/// Captures `file!()`, `line!()`, and `module_path!()` (the fallback logger
/// name for calls with no receiver). Arguments are passed by reference:
///
/// ```
/// use crosscut_trace::call_context;
///
/// let width = 3i32;
/// let height = 4i32;
/// let ctx = call_context!(method: "area", args: [&width, &height]);
/// assert_eq!(ctx.args.len(), 2);
///
/// struct Rect;
/// let rect = Rect;
/// let ctx = call_context!(method: "area", target: &rect, args: []);
/// assert!(ctx.target.is_some());
/// ```
#[macro_export]
macro_rules! call_context {
    (method: $method:expr, target: $receiver:expr, args: [$($arg:expr),* $(,)?]) => {
        $crate::CallContext {
            target: ::core::option::Option::Some(::std::any::type_name_of_val($receiver)),
            scope: ::core::option::Option::Some(module_path!()),
            method: $method,
            file: file!(),
            line: line!(),
            args: &[$($arg as &dyn $crate::Describe),*],
        }
    };
    (method: $method:expr, args: [$($arg:expr),* $(,)?]) => {
        $crate::CallContext {
            target: ::core::option::Option::None,
            scope: ::core::option::Option::Some(module_path!()),
            method: $method,
            file: file!(),
            line: line!(),
            args: &[$($arg as &dyn $crate::Describe),*],
        }
    };
}

// =============================================================================
// Tests
// =============================================================================
