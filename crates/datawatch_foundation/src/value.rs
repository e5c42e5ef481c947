//! Host-native and external value representations.
//!
//! A watched record stores its payload in host form ([`HostValue`]); callers
//! see the external form ([`Value`]). The two differ only for the composite
//! special types, which carry shared record handles on the host side and
//! wrapper values on the external side.

use std::fmt;
use std::sync::Arc;

use crate::position::{Position, TripleHandle};
use crate::stack::{ItemStack, StackHandle};
use crate::types::Type;

/// A payload in host-native form.
///
/// Primitives and strings are immutable copies; composite records are
/// shared handles, so `Clone` is a reference copy for those variants.
#[derive(Clone)]
pub enum HostValue {
    /// 8-bit signed integer.
    Byte(i8),
    /// 16-bit signed integer.
    Short(i16),
    /// 32-bit signed integer.
    Int(i32),
    /// 32-bit floating point.
    Float(f32),
    /// String value.
    String(Arc<str>),
    /// Composite item-stack record.
    Stack(StackHandle),
    /// Coordinate-triple record.
    Triple(TripleHandle),
}

impl HostValue {
    /// Returns the host-declared type of this value.
    #[must_use]
    pub fn host_type(&self) -> Type {
        match self {
            Self::Byte(_) => Type::Byte,
            Self::Short(_) => Type::Short,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::String(_) => Type::String,
            Self::Stack(_) => Type::Stack,
            Self::Triple(_) => Type::Triple,
        }
    }
}

// Composite variants compare record contents, not handle identity.
impl PartialEq for HostValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Byte(a), Self::Byte(b)) => a == b,
            (Self::Short(a), Self::Short(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Stack(a), Self::Stack(b)) => *a.borrow() == *b.borrow(),
            (Self::Triple(a), Self::Triple(b)) => *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

impl Eq for HostValue {}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(v) => write!(f, "{v}b"),
            Self::Short(v) => write!(f, "{v}s"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Stack(h) => write!(f, "Stack({:?})", h.borrow()),
            Self::Triple(h) => write!(f, "Triple({:?})", h.borrow()),
        }
    }
}

/// A payload in external form.
///
/// This is what entry reads return and what entry writes accept: composite
/// host records appear as their wrapper values, everything else passes
/// through unchanged.
#[derive(Clone)]
pub enum Value {
    /// 8-bit signed integer.
    Byte(i8),
    /// 16-bit signed integer.
    Short(i16),
    /// 32-bit signed integer.
    Int(i32),
    /// 32-bit floating point.
    Float(f32),
    /// String value.
    String(Arc<str>),
    /// External item-stack value.
    Stack(ItemStack),
    /// External coordinate wrapper.
    Position(Position),
}

impl Value {
    /// Returns the external-facing type of this value.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Byte(_) => Type::Byte,
            Self::Short(_) => Type::Short,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::String(_) => Type::String,
            Self::Stack(_) => Type::Stack,
            Self::Position(_) => Type::Position,
        }
    }

    /// Attempts to extract a byte value.
    #[must_use]
    pub const fn as_byte(&self) -> Option<i8> {
        match self {
            Self::Byte(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to extract a short value.
    #[must_use]
    pub const fn as_short(&self) -> Option<i16> {
        match self {
            Self::Short(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an item-stack reference.
    #[must_use]
    pub const fn as_stack(&self) -> Option<&ItemStack> {
        match self {
            Self::Stack(stack) => Some(stack),
            _ => None,
        }
    }

    /// Attempts to extract a position reference.
    #[must_use]
    pub const fn as_position(&self) -> Option<&Position> {
        match self {
            Self::Position(pos) => Some(pos),
            _ => None,
        }
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Byte(a), Self::Byte(b)) => a == b,
            (Self::Short(a), Self::Short(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Stack(a), Self::Stack(b)) => a == b,
            (Self::Position(a), Self::Position(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(v) => write!(f, "{v}b"),
            Self::Short(v) => write!(f, "{v}s"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Stack(stack) => write!(f, "{stack:?}"),
            Self::Position(pos) => write!(f, "{pos:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Stack(stack) => write!(f, "{stack}"),
            Self::Position(pos) => write!(f, "{pos}"),
        }
    }
}

// Convenience From implementations

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<ItemStack> for Value {
    fn from(stack: ItemStack) -> Self {
        Self::Stack(stack)
    }
}

impl From<Position> for Value {
    fn from(pos: Position) -> Self {
        Self::Position(pos)
    }
}
