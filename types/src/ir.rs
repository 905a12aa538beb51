//! Intermediate Representation (IR) for IDL type references.
//!
//! This module contains the in-memory form of a type reference as it appears
//! in a schema, and the rules for writing it back out.
//!
//! ## Structure
//!
//! - **Core types**: `Type` and its five variant structs
//! - **Primitives**: `PrimitiveKind` with its id and keyword tables
//! - **Annotations**: `Annotation` and the annotation block formatter
//! - **Display**: canonical rendering of every variant
//! - **Visitor**: read-only traversal over type trees

pub mod annotation;
pub mod display;
pub mod primitive;
pub mod ty;
pub mod visit;

pub use annotation::{Annotation, Annotations, format_annotations};
pub use primitive::{PrimitiveKind, UnknownKeyword, UnknownPrimitiveKind};
pub use ty::{ListType, MapType, PrimitiveType, SetType, Type, TypeReference};
pub use visit::{ReferenceCollector, TypeVisitor};
