#![allow(dead_code, unused_macros)]

use once_cell::sync::Lazy;
use thrift_idl::{Annotation, PrimitiveKind, Type};

pub fn prim(kind: PrimitiveKind) -> Type {
    Type::primitive(kind, vec![])
}

pub fn ann(name: &str, value: &str) -> Annotation {
    Annotation::new(name, value, 1)
}

/// Asserts the canonical rendering of a type, and that rendering a clone
/// yields the same text.
macro_rules! test_case {
    (
        name: $name:ident,
        ty: $ty:expr,
        rendered: $rendered:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let ty: thrift_idl::Type = $ty;
            pretty_assertions::assert_eq!(ty.to_string(), $rendered);
            pretty_assertions::assert_eq!(ty.clone().to_string(), ty.to_string());
        }
    };
}

pub struct TestCase {
    pub name: &'static str,
    pub ty: Type,
}

/// Golden table shared by the suites that check properties over many shapes.
pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "bare_primitive",
            ty: prim(PrimitiveKind::I32),
        },
        TestCase {
            name: "annotated_primitive",
            ty: Type::primitive(PrimitiveKind::Bool, vec![ann("go.type", "int")]),
        },
        TestCase {
            name: "map_of_list",
            ty: Type::map(
                Type::list(prim(PrimitiveKind::I32), vec![]),
                prim(PrimitiveKind::String),
                vec![],
            ),
        },
        TestCase {
            name: "annotated_map",
            ty: Type::map(
                prim(PrimitiveKind::String),
                Type::list(prim(PrimitiveKind::I32), vec![]),
                vec![ann("java.type", "MultiMap")],
            ),
        },
        TestCase {
            name: "annotated_list",
            ty: Type::list(prim(PrimitiveKind::I64), vec![ann("cpp.type", "vector")]),
        },
        TestCase {
            name: "annotated_set",
            ty: Type::set(prim(PrimitiveKind::String), vec![ann("js.type", "list")]),
        },
        TestCase {
            name: "reference",
            ty: Type::reference("UserProfile", 27),
        },
        TestCase {
            name: "set_of_references",
            ty: Type::set(Type::reference("shared.Tag", 3), vec![]),
        },
        TestCase {
            name: "annotations_inside_and_out",
            ty: Type::list(
                Type::primitive(PrimitiveKind::Binary, vec![ann("py.type", "bytes")]),
                vec![ann("a", "1"), ann("b", "2")],
            ),
        },
    ]
});
