//! Primitive (base) types of the IDL.
//!
//! Every primitive kind has a stable numeric id and exactly one lowercase
//! keyword. The id table is what serialized ASTs and generated parsers carry
//! around; the keyword table is what the renderer writes.

use core::fmt;
use core::str::FromStr;

/// Primitive type kinds.
///
/// The discriminants are the stable ids, starting at 1. Zero is reserved so
/// that a zero-initialized id can never be mistaken for `bool`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PrimitiveKind {
    /// `bool`
    Bool = 1,

    /// `byte`
    Byte = 2,

    /// `i16`
    I16 = 3,

    /// `i32`
    I32 = 4,

    /// `i64`
    I64 = 5,

    /// `double`
    Double = 6,

    /// `string`
    String = 7,

    /// `binary`
    Binary = 8,
}

/// Returned by `PrimitiveKind::try_from` for an id outside `1..=8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown primitive kind {id}")]
pub struct UnknownPrimitiveKind {
    pub id: i32,
}

/// Returned by `str::parse::<PrimitiveKind>` for a word that is not one of
/// the eight keywords.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{keyword}` is not a primitive type keyword")]
pub struct UnknownKeyword {
    pub keyword: alloc::string::String,
}

impl PrimitiveKind {
    /// All kinds, in id order.
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Byte,
        PrimitiveKind::I16,
        PrimitiveKind::I32,
        PrimitiveKind::I64,
        PrimitiveKind::Double,
        PrimitiveKind::String,
        PrimitiveKind::Binary,
    ];

    /// The canonical IDL keyword for this kind.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::Double => "double",
            PrimitiveKind::String => "string",
            PrimitiveKind::Binary => "binary",
        }
    }

    /// The stable numeric id of this kind.
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Looks up a kind by id, treating an unknown id as a bug in the caller.
    ///
    /// Use this where the id was produced by trusted code (a parser table, a
    /// decoder that already validated its input). Use `TryFrom<i32>` when the
    /// id may legitimately be out of range.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in `1..=8`.
    ///
    /// # Example
    ///
    /// ```
    /// use thrift_idl_types::PrimitiveKind;
    ///
    /// assert_eq!(PrimitiveKind::from_id(4), PrimitiveKind::I32);
    /// ```
    pub fn from_id(id: i32) -> Self {
        match Self::try_from(id) {
            Ok(kind) => kind,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns true for the fixed-width integer kinds (`byte`, `i16`, `i32`, `i64`).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte | PrimitiveKind::I16 | PrimitiveKind::I32 | PrimitiveKind::I64
        )
    }

    /// Returns true for the kinds carried as byte sequences (`string`, `binary`).
    pub fn is_string_like(&self) -> bool {
        matches!(self, PrimitiveKind::String | PrimitiveKind::Binary)
    }
}

impl TryFrom<i32> for PrimitiveKind {
    type Error = UnknownPrimitiveKind;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        let kind = match id {
            1 => PrimitiveKind::Bool,
            2 => PrimitiveKind::Byte,
            3 => PrimitiveKind::I16,
            4 => PrimitiveKind::I32,
            5 => PrimitiveKind::I64,
            6 => PrimitiveKind::Double,
            7 => PrimitiveKind::String,
            8 => PrimitiveKind::Binary,
            _ => {
                tracing::debug!(id, "rejected primitive kind id");
                return Err(UnknownPrimitiveKind { id });
            }
        };
        Ok(kind)
    }
}

impl FromStr for PrimitiveKind {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match PrimitiveKind::ALL.into_iter().find(|kind| kind.keyword() == s) {
            Some(kind) => Ok(kind),
            None => {
                tracing::debug!(keyword = s, "rejected primitive keyword");
                Err(UnknownKeyword { keyword: s.into() })
            }
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
