//! Synthetic-field exclusion.
//!
//! Generated field lists may carry entries injected by build tooling, named
//! with the reserved marker character. Those entries must never affect
//! equality, hashing, or rendering.

use crosscut_domain::{DomainObject, Field, SYNTHETIC_MARKER};

struct Woven {
    id: i64,
    // Stands in for state injected by a weaving tool, not semantic state.
    join_point_cache: u64,
}

impl DomainObject for Woven {
    fn type_label(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn declared_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field {
                name: "id",
                value: &self.id,
            },
            Field {
                name: "ajc$tjp",
                value: &self.join_point_cache,
            },
        ]
    }
}

#[test]
fn marker_is_the_dollar_character() {
    assert_eq!(SYNTHETIC_MARKER, '$');
    assert!("ajc$tjp".contains(SYNTHETIC_MARKER));
}

#[test]
fn synthetic_field_does_not_affect_equality() {
    let a = Woven {
        id: 1,
        join_point_cache: 100,
    };
    let b = Woven {
        id: 1,
        join_point_cache: 200,
    };
    assert!(a.structural_eq(&b));
}

#[test]
fn synthetic_field_does_not_affect_hash() {
    let a = Woven {
        id: 1,
        join_point_cache: 100,
    };
    let b = Woven {
        id: 1,
        join_point_cache: 200,
    };
    assert_eq!(a.structural_hash(), b.structural_hash());
}

#[test]
fn synthetic_field_never_appears_in_rendering() {
    let a = Woven {
        id: 1,
        join_point_cache: 100,
    };
    let rendered = a.structural_string();
    assert!(rendered.contains("id='1'"));
    assert!(!rendered.contains("ajc$tjp"));
    assert!(!rendered.contains("100"));
}

#[test]
fn semantic_fields_still_distinguish_instances() {
    let a = Woven {
        id: 1,
        join_point_cache: 100,
    };
    let b = Woven {
        id: 2,
        join_point_cache: 100,
    };
    assert!(!a.structural_eq(&b));
}
