//! Error types for the datawatch system.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure is
//! synchronous, reported to the immediate caller, and leaves the entry in
//! its prior valid state; nothing here is retried or logged.

use thiserror::Error;

use crate::types::{Projection, Type};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for datawatch operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an unsupported type error.
    #[must_use]
    pub fn unsupported_type(ty: Type) -> Self {
        Self::new(ErrorKind::UnsupportedType(ty))
    }

    /// Creates an unrecognized type id error.
    #[must_use]
    pub fn unrecognized_type(id: i32) -> Self {
        Self::new(ErrorKind::UnrecognizedType(id))
    }

    /// Creates a positional access failure.
    #[must_use]
    pub fn access_failure(projection: Projection, slot: usize) -> Self {
        Self::new(ErrorKind::AccessFailure { projection, slot })
    }

    /// Creates a duplicate type id registration error.
    #[must_use]
    pub fn duplicate_type_id(id: i32) -> Self {
        Self::new(ErrorKind::DuplicateTypeId { id })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument was outside its contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A new value's type is incompatible with the entry's declared type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The entry's resolved external type.
        expected: Type,
        /// The type of the rejected value.
        actual: Type,
    },

    /// A fresh entry was constructed from a value with no registered id.
    #[error("cannot watch values of type {0}: no registered type id")]
    UnsupportedType(Type),

    /// A stored type id has no registered type. Indicates registry or
    /// record corruption rather than ordinary misuse.
    #[error("unrecognized type id: {0}")]
    UnrecognizedType(i32),

    /// The positional access collaborator could not read or write a slot.
    /// Surfaced verbatim; retrying cannot succeed.
    #[error("record access failed: no {projection} slot {slot}")]
    AccessFailure {
        /// The typed projection that was addressed.
        projection: Projection,
        /// The slot position within that projection.
        slot: usize,
    },

    /// A type id was registered twice.
    #[error("type id already registered: {id}")]
    DuplicateTypeId {
        /// The colliding id.
        id: i32,
    },
}
