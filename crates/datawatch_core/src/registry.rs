//! The type registry mapping numeric type ids to types.
//!
//! Read-only at steady state: the registry is populated once, before any
//! entry is constructed, and consulted on every type resolution.

use std::collections::HashMap;

use datawatch_foundation::{Error, Result, Type};

/// Bidirectional registry of numeric type ids.
///
/// Stores host-declared types only; lookups by type consult the external
/// to host mapping first, so the coordinate wrapper resolves to the
/// triple record's id.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    by_id: HashMap<i32, Type>,
    by_type: HashMap<Type, i32>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the standard host table.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut registry = Self::new();
        for (id, ty) in [
            (0, Type::Byte),
            (1, Type::Short),
            (2, Type::Int),
            (3, Type::Float),
            (4, Type::String),
            (5, Type::Stack),
            (6, Type::Triple),
        ] {
            registry.by_id.insert(id, ty);
            registry.by_type.insert(ty, id);
        }
        registry
    }

    /// Registers a host-declared type under a numeric id.
    ///
    /// # Errors
    ///
    /// Fails with `DuplicateTypeId` if the id is taken, and with
    /// `InvalidArgument` if the type is already registered or is an
    /// external-only wrapper type.
    pub fn register(&mut self, id: i32, ty: Type) -> Result<()> {
        if ty.unwrapped() != ty {
            return Err(Error::invalid_argument(format!(
                "cannot register external wrapper type {ty}"
            )));
        }
        if self.by_id.contains_key(&id) {
            return Err(Error::duplicate_type_id(id));
        }
        if self.by_type.contains_key(&ty) {
            return Err(Error::invalid_argument(format!(
                "type already registered: {ty}"
            )));
        }
        self.by_id.insert(id, ty);
        self.by_type.insert(ty, id);
        Ok(())
    }

    /// Resolves a numeric id to its host-declared type.
    #[must_use]
    pub fn type_for(&self, id: i32) -> Option<Type> {
        self.by_id.get(&id).copied()
    }

    /// Resolves a type to its numeric id.
    ///
    /// External wrapper types resolve through their host equivalent.
    #[must_use]
    pub fn id_for(&self, ty: Type) -> Option<i32> {
        self.by_type.get(&ty.unwrapped()).copied()
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
