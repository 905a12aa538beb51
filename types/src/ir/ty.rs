use super::{Annotation, PrimitiveKind};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// A reference to a type, as written in a field, parameter, typedef, or
/// container parameter.
///
/// The set of variants is closed. Consumers are expected to match on all five
/// without a wildcard arm, so that adding a variant is a compile error at
/// every consumer.
///
/// Containers own their parameters; a type reference is always a finite tree.
///
/// # Example
///
/// ```
/// use thrift_idl_types::{PrimitiveKind, Type};
///
/// let ty = Type::map(
///     Type::list(Type::primitive(PrimitiveKind::I32, vec![]), vec![]),
///     Type::primitive(PrimitiveKind::String, vec![]),
///     vec![],
/// );
/// assert_eq!(ty.to_string(), "map<list<i32>, string>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// `bool`, `i32`, `string`, ...
    Primitive(PrimitiveType),

    /// `map<K, V>`
    Map(MapType),

    /// `list<T>`
    List(ListType),

    /// `set<T>`
    Set(SetType),

    /// A user-defined type referenced by name.
    Reference(TypeReference),
}

/// A primitive type with its annotations.
///
/// ```text
/// bool (go.type = "int")
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimitiveType {
    pub kind: PrimitiveKind,
    pub annotations: Vec<Annotation>,
}

/// `map<K, V>`, optionally annotated.
///
/// ```text
/// map<string, list<i32>> (java.type = "MultiMap")
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MapType {
    pub key: Box<Type>,
    pub value: Box<Type>,
    pub annotations: Vec<Annotation>,
}

/// `list<T>`, optionally annotated.
///
/// ```text
/// list<i64> (cpp.type = "vector")
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListType {
    pub element: Box<Type>,
    pub annotations: Vec<Annotation>,
}

/// `set<T>`, optionally annotated.
///
/// ```text
/// set<string> (js.type = "list")
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SetType {
    pub element: Box<Type>,
    pub annotations: Vec<Annotation>,
}

/// A reference to a user-defined type (struct, enum, typedef, ...).
///
/// The name is not resolved here. It may be qualified with an include prefix
/// (`shared.UserId`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeReference {
    pub name: String,

    /// Line of the reference in its source file, for diagnostics only.
    pub line: u32,
}

impl Type {
    pub fn primitive(kind: PrimitiveKind, annotations: Vec<Annotation>) -> Self {
        Type::Primitive(PrimitiveType { kind, annotations })
    }

    pub fn map(key: Type, value: Type, annotations: Vec<Annotation>) -> Self {
        Type::Map(MapType {
            key: Box::new(key),
            value: Box::new(value),
            annotations,
        })
    }

    pub fn list(element: Type, annotations: Vec<Annotation>) -> Self {
        Type::List(ListType {
            element: Box::new(element),
            annotations,
        })
    }

    pub fn set(element: Type, annotations: Vec<Annotation>) -> Self {
        Type::Set(SetType {
            element: Box::new(element),
            annotations,
        })
    }

    pub fn reference(name: impl Into<String>, line: u32) -> Self {
        Type::Reference(TypeReference {
            name: name.into(),
            line,
        })
    }

    /// Annotations attached to this type. Always empty for references, which
    /// cannot carry annotations.
    pub fn annotations(&self) -> &[Annotation] {
        match self {
            Type::Primitive(t) => &t.annotations,
            Type::Map(t) => &t.annotations,
            Type::List(t) => &t.annotations,
            Type::Set(t) => &t.annotations,
            Type::Reference(_) => &[],
        }
    }

    /// Source line, when this type carries one.
    pub fn line(&self) -> Option<u32> {
        match self {
            Type::Reference(r) => Some(r.line),
            Type::Primitive(_) | Type::Map(_) | Type::List(_) | Type::Set(_) => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Type::Map(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Type::Set(_))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Type::Reference(_))
    }

    /// Check if this is a map, list, or set.
    pub fn is_container(&self) -> bool {
        matches!(self, Type::Map(_) | Type::List(_) | Type::Set(_))
    }

    /// Returns the primitive kind if this is a primitive type.
    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Type::Primitive(t) => Some(t.kind),
            _ => None,
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(t: PrimitiveType) -> Self {
        Type::Primitive(t)
    }
}

impl From<MapType> for Type {
    fn from(t: MapType) -> Self {
        Type::Map(t)
    }
}

impl From<ListType> for Type {
    fn from(t: ListType) -> Self {
        Type::List(t)
    }
}

impl From<SetType> for Type {
    fn from(t: SetType) -> Self {
        Type::Set(t)
    }
}

impl From<TypeReference> for Type {
    fn from(t: TypeReference) -> Self {
        Type::Reference(t)
    }
}

impl From<PrimitiveKind> for Type {
    /// An unannotated primitive.
    fn from(kind: PrimitiveKind) -> Self {
        Type::primitive(kind, Vec::new())
    }
}
