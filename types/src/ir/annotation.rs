//! Type annotations.
//!
//! Annotations are vendor or tooling hints attached to a type reference:
//!
//! ```text
//! map<string, list<i32>> (java.type = "MultiMap", cpp.template = "std::map")
//! ```
//!
//! This layer does not interpret them. It keeps them in source order and
//! knows how to write them back.

use alloc::string::String;
use core::fmt::{self, Write};

/// A single `name = "value"` annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    /// Annotation key, usually dotted (`go.type`).
    pub name: String,

    /// Unquoted, unescaped value.
    pub value: String,

    /// Source line the annotation was found on. Not part of the rendered form.
    pub line: u32,
}

impl Annotation {
    pub fn new(name: impl Into<String>, value: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line,
        }
    }
}

impl fmt::Display for Annotation {
    /// Writes `name = "value"`, quoting and escaping the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?}", self.name, self.value)
    }
}

/// Display adapter for an ordered annotation list.
///
/// Writes nothing for an empty list and `(a = "x", b = "y")` otherwise. The
/// space that separates the block from the type it follows is not included.
#[derive(Copy, Clone, Debug)]
pub struct Annotations<'a>(pub &'a [Annotation]);

impl Annotations<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Annotations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_char('(')?;
        for (i, annotation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{annotation}")?;
        }
        f.write_char(')')
    }
}

/// Formats an annotation list as a parenthesized block.
///
/// Returns an empty string for an empty list.
///
/// # Example
///
/// ```
/// use thrift_idl_types::{Annotation, format_annotations};
///
/// let annotations = [
///     Annotation::new("go.type", "int", 3),
///     Annotation::new("js.type", "number", 3),
/// ];
/// assert_eq!(
///     format_annotations(&annotations),
///     r#"(go.type = "int", js.type = "number")"#
/// );
/// assert_eq!(format_annotations(&[]), "");
/// ```
pub fn format_annotations(annotations: &[Annotation]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(out, "{}", Annotations(annotations));
    out
}
