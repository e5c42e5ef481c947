//! Type descriptors for the watched-value universe.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type descriptor for watched values.
///
/// Covers both the host-declared storage types and the external-facing
/// types in a single closed universe. [`Type::Triple`] is the host
/// coordinate-triple record type; [`Type::Position`] is its external
/// wrapper type. Every other type is shared between the two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// 8-bit signed integer.
    Byte,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 32-bit floating point.
    Float,
    /// String type.
    String,
    /// Item-stack record (same declared type on both sides).
    Stack,
    /// Host coordinate-triple record.
    Triple,
    /// External coordinate wrapper.
    Position,
}

impl Type {
    /// Maps a host-declared type to its external-facing equivalent.
    ///
    /// Only the coordinate triple is special-cased; everything else maps
    /// to itself.
    #[must_use]
    pub fn wrapped(self) -> Self {
        match self {
            Self::Triple => Self::Position,
            other => other,
        }
    }

    /// Maps an external-facing type to its host-declared equivalent.
    ///
    /// Inverse of [`Type::wrapped`].
    #[must_use]
    pub fn unwrapped(self) -> Self {
        match self {
            Self::Position => Self::Triple,
            other => other,
        }
    }

    /// Checks whether a value of type `other` is assignable to this type.
    ///
    /// The universe is closed and has no subtyping, so assignability is
    /// exact equality.
    #[must_use]
    pub fn accepts(self, other: Self) -> bool {
        self == other
    }

    /// Returns true for the composite types that need deep conversion
    /// between host and external form.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Self::Stack | Self::Triple | Self::Position)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte => write!(f, "byte"),
            Self::Short => write!(f, "short"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Stack => write!(f, "stack"),
            Self::Triple => write!(f, "triple"),
            Self::Position => write!(f, "position"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The typed views by which host-record slots are addressed.
///
/// A watched record is accessed positionally through one projection per
/// declared primitive type, never by field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Projection {
    /// The int-typed slots (type id and index).
    Int,
    /// The bool-typed slots (dirty flag).
    Bool,
    /// The value-typed slots (payload).
    Value,
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Bool => write!(f, "bool"),
            Self::Value => write!(f, "value"),
        }
    }
}
