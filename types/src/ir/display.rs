//! Canonical rendering of type references.
//!
//! ```text
//! type        := primitive | map | list | set | reference
//! primitive   := keyword [annotations]
//! map         := "map<" type ", " type ">" [annotations]
//! list        := "list<" type ">" [annotations]
//! set         := "set<" type ">" [annotations]
//! reference   := identifier
//! annotations := " (" annotation {", " annotation} ")"
//! ```
//!
//! The output depends only on the value; source lines never appear in it.

use super::{
    Annotation, Annotations, ListType, MapType, PrimitiveType, SetType, Type, TypeReference,
};
use core::fmt;

/// Writes ` (annotations...)` after an already written type, or nothing.
fn write_annotations(f: &mut fmt::Formatter<'_>, annotations: &[Annotation]) -> fmt::Result {
    if annotations.is_empty() {
        return Ok(());
    }
    write!(f, " {}", Annotations(annotations))
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(t) => fmt::Display::fmt(t, f),
            Type::Map(t) => fmt::Display::fmt(t, f),
            Type::List(t) => fmt::Display::fmt(t, f),
            Type::Set(t) => fmt::Display::fmt(t, f),
            Type::Reference(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.keyword())?;
        write_annotations(f, &self.annotations)
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map<{}, {}>", self.key, self.value)?;
        write_annotations(f, &self.annotations)
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list<{}>", self.element)?;
        write_annotations(f, &self.annotations)
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set<{}>", self.element)?;
        write_annotations(f, &self.annotations)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveKind;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    fn prim(kind: PrimitiveKind) -> Type {
        Type::primitive(kind, vec![])
    }

    #[test]
    fn test_format_primitives() {
        let rendered: Vec<_> = PrimitiveKind::ALL
            .into_iter()
            .map(|kind| prim(kind).to_string())
            .collect();
        assert_eq!(
            rendered,
            ["bool", "byte", "i16", "i32", "i64", "double", "string", "binary"]
        );
    }

    #[test]
    fn test_format_annotated_primitive() {
        let ty = Type::primitive(PrimitiveKind::Bool, vec![Annotation::new("go.type", "int", 1)]);
        assert_eq!(ty.to_string(), r#"bool (go.type = "int")"#);
    }

    #[test]
    fn test_format_map() {
        let ty = Type::map(prim(PrimitiveKind::String), prim(PrimitiveKind::I64), vec![]);
        assert_eq!(ty.to_string(), "map<string, i64>");
    }

    #[test]
    fn test_format_nested_containers() {
        let ty = Type::map(
            Type::list(prim(PrimitiveKind::I32), vec![]),
            prim(PrimitiveKind::String),
            vec![],
        );
        assert_eq!(ty.to_string(), "map<list<i32>, string>");
    }

    #[test]
    fn test_format_annotated_set() {
        let ty = Type::set(
            prim(PrimitiveKind::String),
            vec![Annotation::new("js.type", "list", 2)],
        );
        assert_eq!(ty.to_string(), r#"set<string> (js.type = "list")"#);
    }

    #[test]
    fn test_format_annotations_at_every_level() {
        let ty = Type::map(
            Type::primitive(PrimitiveKind::String, vec![Annotation::new("a", "1", 1)]),
            Type::list(
                Type::reference("Item", 1),
                vec![Annotation::new("cpp.type", "vector", 1)],
            ),
            vec![
                Annotation::new("java.type", "MultiMap", 1),
                Annotation::new("x", "y", 1),
            ],
        );
        assert_eq!(
            ty.to_string(),
            r#"map<string (a = "1"), list<Item> (cpp.type = "vector")> (java.type = "MultiMap", x = "y")"#
        );
    }

    #[test]
    fn test_format_reference_ignores_line() {
        assert_eq!(Type::reference("UserProfile", 1).to_string(), "UserProfile");
        assert_eq!(Type::reference("UserProfile", 900).to_string(), "UserProfile");
        assert_eq!(Type::reference("shared.UserId", 3).to_string(), "shared.UserId");
    }

    #[test]
    fn test_variant_struct_display_matches_type() {
        let list = ListType {
            element: alloc::boxed::Box::new(prim(PrimitiveKind::Binary)),
            annotations: vec![],
        };
        assert_eq!(list.to_string(), Type::from(list.clone()).to_string());
    }
}
