//! Structural equality, hashing, and rendering for domain objects.
//!
//! This crate provides:
//! - [`DomainObject`] - Equality, hash, and string rendering computed from a
//!   type's own declared fields, in one stable order
//! - [`FieldValue`] / [`Field`] - Type-erased field values with downcast
//!   equality and bounded rendering
//! - [`domain_object!`] - Generates the field list and the standard trait
//!   impls for a struct
//! - [`SYNTHETIC_MARKER`] - Fields whose names contain it are excluded from
//!   every computed property

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod field;
mod macros;
pub mod object;

pub use field::{Field, FieldValue};
pub use object::{DomainObject, SYNTHETIC_MARKER};
