//! The `domain_object!` implementation macro.

/// Implements [`DomainObject`](crate::DomainObject) for a struct from its
/// field list, plus the standard traits delegating to the structural
/// operations: `PartialEq`/`Eq` (structural equality), `Hash` (structural
/// hash), `Display` (structural rendering), and
/// [`FieldValue`](crate::FieldValue) so instances can nest as fields of
/// other domain objects.
///
/// Fields are listed in declaration order; that order is the one used by
/// equality, hashing, and rendering. Hand-write the `DomainObject` impl
/// instead when a type needs to override `render_field_value` or carry a
/// generated field list.
///
/// ```
/// use crosscut_domain::domain_object;
///
/// struct Rect {
///     width: i32,
///     height: i32,
/// }
///
/// domain_object!(Rect { width, height });
///
/// let a = Rect { width: 3, height: 4 };
/// let b = Rect { width: 3, height: 4 };
/// assert_eq!(a, b);
/// assert!(a.to_string().ends_with("Rect{width='3', height='4'}"));
/// ```
#[macro_export]
macro_rules! domain_object {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::DomainObject for $ty {
            fn type_label(&self) -> &'static str {
                ::std::any::type_name::<$ty>()
            }

            fn declared_fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                vec![$(
                    $crate::Field {
                        name: stringify!($field),
                        value: &self.$field,
                    }
                ),*]
            }
        }

        impl $crate::FieldValue for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn eq_value(&self, other: &dyn $crate::FieldValue) -> bool {
                other
                    .as_any()
                    .downcast_ref::<$ty>()
                    .is_some_and(|o| $crate::DomainObject::structural_eq(self, o))
            }

            fn value_hash(&self) -> u64 {
                $crate::DomainObject::structural_hash(self)
            }

            fn render(&self) -> ::std::string::String {
                $crate::DomainObject::structural_string(self)
            }
        }

        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::DomainObject::structural_eq(self, other)
            }
        }

        impl ::std::cmp::Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::DomainObject::structural_hash(self));
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::DomainObject::structural_string(self))
            }
        }

        impl ::std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::DomainObject::structural_string(self))
            }
        }
    };
}

// =============================================================================
// Tests
// =============================================================================
