//! Type-erased field values.
//!
//! A domain object's state is exposed as an ordered list of [`Field`]s, each
//! holding a name and a [`FieldValue`]. Values of different concrete types
//! never compare equal; an absent value (`Option::None`) renders as `null`
//! and hashes to zero; list-like containers render a size placeholder
//! instead of their contents so debug output stays bounded.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// =============================================================================
// Field Value
// =============================================================================

/// A single field value, erased to a common comparison surface.
pub trait FieldValue: Any {
    /// Returns the value for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Compares against another erased value. Values of different concrete
    /// types are never equal.
    fn eq_value(&self, other: &dyn FieldValue) -> bool;

    /// Returns this value's hash contribution. Equal values must hash
    /// equally; an absent value contributes zero.
    fn value_hash(&self) -> u64;

    /// Returns the string form used for rendering.
    fn render(&self) -> String;
}

/// A named field of a domain object.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// The declared field name.
    pub name: &'static str,
    /// The field's current value.
    pub value: &'a dyn FieldValue,
}

fn hash_one<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Scalar Values
// =============================================================================

macro_rules! impl_field_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            fn as_any(&self) -> &dyn Any {
                self
            }

            fn eq_value(&self, other: &dyn FieldValue) -> bool {
                other.as_any().downcast_ref::<$ty>().is_some_and(|o| self == o)
            }

            fn value_hash(&self) -> u64 {
                hash_one(self)
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_field_value!(
    bool, char, i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, String,
);

macro_rules! impl_field_value_float {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            fn as_any(&self) -> &dyn Any {
                self
            }

            fn eq_value(&self, other: &dyn FieldValue) -> bool {
                // Bitwise comparison keeps the hash/equality contract: NaN
                // equals NaN and hashes consistently.
                other
                    .as_any()
                    .downcast_ref::<$ty>()
                    .is_some_and(|o| self.to_bits() == o.to_bits())
            }

            fn value_hash(&self) -> u64 {
                hash_one(&self.to_bits())
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_field_value_float!(f32, f64);

// =============================================================================
// Optional and List Values
// =============================================================================

/// `None` is the absent value: renders `null`, hashes to zero, and equals
/// only another `None` of the same type.
impl<T: FieldValue> FieldValue for Option<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn FieldValue) -> bool {
        match other.as_any().downcast_ref::<Self>() {
            Some(other) => match (self, other) {
                (None, None) => true,
                (Some(a), Some(b)) => a.eq_value(b),
                _ => false,
            },
            None => false,
        }
    }

    fn value_hash(&self) -> u64 {
        match self {
            Some(value) => value.value_hash(),
            None => 0,
        }
    }

    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "null".to_string(),
        }
    }
}

/// Lists compare and hash by content but render only their declared type and
/// element count. Lists may hold thousands of elements; dumping them rarely
/// helps and makes logs harder to read.
impl<T> FieldValue for Vec<T>
where
    T: PartialEq + Hash + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn FieldValue) -> bool {
        other.as_any().downcast_ref::<Self>().is_some_and(|o| self == o)
    }

    fn value_hash(&self) -> u64 {
        hash_one(self)
    }

    fn render(&self) -> String {
        format!(
            "{} {{content omitted; size={}}}",
            std::any::type_name::<Self>(),
            self.len()
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
