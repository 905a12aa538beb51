//! Thrift IDL - type references for interface definition languages
//!
//! # Overview
//!
//! Every stage of an IDL toolchain talks about type references: the parser
//! builds them, the validator resolves the names they mention, the code
//! generator maps them onto target-language types, and diagnostics print
//! them. This crate is that shared vocabulary.
//!
//! A type reference is one of:
//!
//! - a primitive: `bool`, `byte`, `i16`, `i32`, `i64`, `double`, `string`, `binary`
//! - a container: `map<K, V>`, `list<T>`, `set<T>`
//! - a reference to a user-defined type by name
//!
//! Primitives and containers may carry a trailing annotation block such as
//! `(java.type = "MultiMap")`.
//!
//! # Quick Start
//!
//! ```
//! use thrift_idl::{Annotation, PrimitiveKind, Type};
//!
//! let ty = Type::map(
//!     Type::primitive(PrimitiveKind::String, vec![]),
//!     Type::list(Type::reference("UserProfile", 12), vec![]),
//!     vec![Annotation::new("java.type", "MultiMap", 12)],
//! );
//!
//! assert_eq!(
//!     ty.to_string(),
//!     r#"map<string, list<UserProfile>> (java.type = "MultiMap")"#
//! );
//! ```
//!
//! # Walking types
//!
//! ```
//! use thrift_idl::{Type, TypeVisitor};
//!
//! struct Names(Vec<String>);
//!
//! impl<'ty> TypeVisitor<'ty> for Names {
//!     fn visit_ty(&mut self, ty: &'ty Type) {
//!         if let Type::Reference(r) = ty {
//!             self.0.push(r.name.clone());
//!         }
//!         self.super_visit_ty(ty);
//!     }
//! }
//!
//! let ty = Type::set(Type::reference("Tag", 3), vec![]);
//! let mut names = Names(Vec::new());
//! names.visit_ty(&ty);
//! assert_eq!(names.0, ["Tag"]);
//! ```

// Re-export the type model and renderer
pub use thrift_idl_types::ir::{self, annotation, display, primitive, visit};
pub use thrift_idl_types::{
    Annotation, Annotations, ListType, MapType, PrimitiveKind, PrimitiveType, ReferenceCollector,
    SetType, Type, TypeReference, TypeVisitor, format_annotations,
};

// Re-export errors
pub use thrift_idl_types::{UnknownKeyword, UnknownPrimitiveKind};
