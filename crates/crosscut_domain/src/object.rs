//! The domain object trait: structural equality, hashing, and rendering.
//!
//! A [`DomainObject`] exposes its own declared fields as an ordered list and
//! gets equality, hashing, and string rendering computed from that single
//! order. Field names containing the [`SYNTHETIC_MARKER`] are excluded from
//! all three: such entries are artifacts injected by code generators or
//! weaving tooling, not semantic state.

use std::fmt::Write;

use crate::field::{Field, FieldValue};

/// The reserved marker character. Fields whose names contain it are
/// synthetic and excluded from every computed property.
pub const SYNTHETIC_MARKER: char = '$';

// =============================================================================
// Domain Object
// =============================================================================

/// Structural equality, hashing, and string rendering over a type's own
/// declared fields.
///
/// Implementations supply the type label and the ordered field list (the
/// [`domain_object!`](crate::domain_object) macro generates both); the
/// computed operations are provided. Equality requires an exact type-label
/// match, so instances of different concrete types are never equal even
/// with identical field values.
pub trait DomainObject {
    /// The fully-qualified type name, compared exactly during equality.
    fn type_label(&self) -> &'static str;

    /// The type's own declared fields, in declaration order, before
    /// synthetic filtering. Declaration order must be stable: it is the one
    /// order shared by equality, hashing, and rendering.
    fn declared_fields(&self) -> Vec<Field<'_>>;

    /// Converts one field value to its rendered string form.
    ///
    /// Override to customize per-field rendering; the default delegates to
    /// the value's own rendering (which shows a size placeholder for
    /// list-like containers).
    fn render_field_value(&self, field: &Field<'_>) -> String {
        field.value.render()
    }

    /// The declared fields minus synthetic entries.
    fn fields(&self) -> Vec<Field<'_>> {
        self.declared_fields()
            .into_iter()
            .filter(|field| !field.name.contains(SYNTHETIC_MARKER))
            .collect()
    }

    /// Structural equality: reference identity, then exact type-label match,
    /// then field-by-field value equality.
    fn structural_eq(&self, other: &dyn DomainObject) -> bool {
        if std::ptr::addr_eq(std::ptr::from_ref(self), std::ptr::from_ref(other)) {
            return true;
        }
        if self.type_label() != other.type_label() {
            return false;
        }

        let mine = self.fields();
        let theirs = other.fields();
        if mine.len() != theirs.len() {
            return false;
        }
        mine.iter()
            .zip(theirs.iter())
            .all(|(a, b)| a.value.eq_value(b.value))
    }

    /// Structural hash: a 31-based fold over the field values, in field
    /// order. Structurally equal objects hash equally.
    fn structural_hash(&self) -> u64 {
        self.fields().iter().fold(0u64, |acc, field| {
            acc.wrapping_mul(31).wrapping_add(field.value.value_hash())
        })
    }

    /// Structural rendering: `Type{field1='value1', field2='value2'}` in
    /// field order, through [`render_field_value`](Self::render_field_value).
    fn structural_string(&self) -> String {
        let mut s = String::from(self.type_label());
        s.push('{');
        for (i, field) in self.fields().iter().enumerate() {
            if i != 0 {
                s.push_str(", ");
            }
            let _ = write!(s, "{}='{}'", field.name, self.render_field_value(field));
        }
        s.push('}');
        s
    }
}

// =============================================================================
// Tests
// =============================================================================
