//! Type references of a Thrift-style interface definition language.
//!
//! This crate provides the vocabulary shared by every stage of an IDL
//! toolchain: the in-memory form of a type reference (primitives, `map`,
//! `list`, `set`, and references to user-defined types, each optionally
//! annotated) and its canonical textual rendering.
//!
//! # Example
//!
//! ```
//! use thrift_idl_types::{Annotation, PrimitiveKind, Type};
//!
//! let ty = Type::set(
//!     Type::primitive(PrimitiveKind::String, vec![]),
//!     vec![Annotation::new("js.type", "list", 12)],
//! );
//! assert_eq!(ty.to_string(), r#"set<string> (js.type = "list")"#);
//! ```

#![cfg_attr(not(test), no_std)]
extern crate alloc;

// Intermediate Representation - type model and rendering
pub mod ir;

// Re-export IR types for convenience
pub use ir::{
    Annotation, Annotations, ListType, MapType, PrimitiveKind, PrimitiveType, ReferenceCollector,
    SetType, Type, TypeReference, TypeVisitor, UnknownKeyword, UnknownPrimitiveKind,
    format_annotations,
};
