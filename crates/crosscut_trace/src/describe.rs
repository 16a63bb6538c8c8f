//! Type and value descriptions for traced arguments and return values.
//!
//! Every traced argument is rendered as a `{type=T; value=V}` pair. The
//! labels follow the conventional primitive kind names (`int`, `long`,
//! `boolean`, ...) so that traces stay readable regardless of the concrete
//! Rust width behind them. Descriptions are only built once the sink's
//! enabled guard has passed.

use std::fmt::{self, Display};

// =============================================================================
// Value Description
// =============================================================================

/// A (type label, value label) pair describing a single value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueDesc {
    /// The type label, e.g. `int`, `int[]`, `String`.
    pub type_label: &'static str,
    /// The rendered value, e.g. `42`, `[1, 2, 3]`.
    pub value_label: String,
}

impl ValueDesc {
    /// Creates a description from a type label and a rendered value.
    #[must_use]
    pub fn new(type_label: &'static str, value_label: impl Into<String>) -> Self {
        Self {
            type_label,
            value_label: value_label.into(),
        }
    }

    /// The description of an absent value: `{type=?; value=null}`.
    #[must_use]
    pub fn null() -> Self {
        Self::new("?", "null")
    }
}

impl Display for ValueDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{type={}; value={}}}", self.type_label, self.value_label)
    }
}

/// A value that can describe itself for trace output.
pub trait Describe {
    /// Returns the type and value labels for this value.
    fn describe(&self) -> ValueDesc;
}

// =============================================================================
// Scalar and Array Kinds
// =============================================================================

fn join_elements<T: Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

macro_rules! impl_describe_scalar {
    ($($ty:ty => $label:literal),* $(,)?) => {$(
        impl Describe for $ty {
            fn describe(&self) -> ValueDesc {
                ValueDesc::new($label, self.to_string())
            }
        }

        impl Describe for [$ty] {
            fn describe(&self) -> ValueDesc {
                ValueDesc::new(concat!($label, "[]"), join_elements(self))
            }
        }

        impl<const N: usize> Describe for [$ty; N] {
            fn describe(&self) -> ValueDesc {
                self.as_slice().describe()
            }
        }

        impl Describe for Vec<$ty> {
            fn describe(&self) -> ValueDesc {
                self.as_slice().describe()
            }
        }
    )*};
}

impl_describe_scalar! {
    i8 => "byte",
    u8 => "byte",
    i16 => "short",
    i32 => "int",
    i64 => "long",
    char => "char",
    bool => "boolean",
    f32 => "float",
    f64 => "double",
}

impl Describe for str {
    fn describe(&self) -> ValueDesc {
        ValueDesc::new("String", self)
    }
}

impl Describe for &str {
    fn describe(&self) -> ValueDesc {
        (**self).describe()
    }
}

impl Describe for String {
    fn describe(&self) -> ValueDesc {
        ValueDesc::new("String", self.clone())
    }
}

/// An absent value describes as `{type=?; value=null}`; a present one
/// describes as its contents.
impl<T: Describe> Describe for Option<T> {
    fn describe(&self) -> ValueDesc {
        match self {
            Some(value) => value.describe(),
            None => ValueDesc::null(),
        }
    }
}

/// Heterogeneous argument arrays describe as `Object[]` with each element
/// rendered through its own description.
impl<'a> Describe for [&'a dyn Describe] {
    fn describe(&self) -> ValueDesc {
        let rendered: Vec<String> = self.iter().map(|v| v.describe().value_label).collect();
        ValueDesc::new("Object[]", format!("[{}]", rendered.join(", ")))
    }
}

// =============================================================================
// Application Types
// =============================================================================

/// Returns the unqualified name of a type, e.g. `Rect` for
/// `app::shapes::Rect`.
///
/// This is a heuristic for non-generic types; generic arguments keep their
/// qualified paths.
#[must_use]
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

/// Implements [`Describe`] for application types via their `Display` form.
///
/// The type label is the unqualified type name and the value label is the
/// `Display` rendering, matching how non-array objects are traced.
#[macro_export]
macro_rules! impl_describe_display {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::Describe for $ty {
            fn describe(&self) -> $crate::ValueDesc {
                $crate::ValueDesc::new($crate::simple_type_name::<$ty>(), self.to_string())
            }
        }
    )*};
}

// =============================================================================
// Tests
// =============================================================================
