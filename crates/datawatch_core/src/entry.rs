//! The watched-entry wrapper.

use std::cell::OnceCell;

use datawatch_foundation::{Error, Result, Type, Value};

use crate::convert;
use crate::record::{BlankRecord, HostRecord, RecordAccess, SLOT_DIRTY, SLOT_INDEX, SLOT_TYPE_ID, SLOT_VALUE};
use crate::registry::TypeRegistry;

/// Typed, validated access to one watched host record.
///
/// An entry owns its host record and mediates every read and write: type
/// resolution goes through the [`TypeRegistry`], value translation through
/// the conversion dispatch, and only then does a positional access touch
/// the record. A failed operation leaves the entry in its prior state;
/// all validation happens before any mutation.
///
/// Entries assume a single logical owner; sharing one across threads is
/// the owning collection's problem, not this type's.
#[derive(Debug)]
pub struct WatchedEntry<R: RecordAccess = HostRecord> {
    record: R,
    // External-facing type, resolved from the stored type id on first use
    // and kept for the entry's lifetime.
    resolved: OnceCell<Type>,
}

impl<R: RecordAccess> WatchedEntry<R> {
    /// Wraps an existing host record.
    ///
    /// No eager validation; later accessors enforce the invariants lazily.
    #[must_use]
    pub fn new(record: R) -> Self {
        Self {
            record,
            resolved: OnceCell::new(),
        }
    }

    /// Returns the underlying host record.
    #[must_use]
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Consumes the entry, returning the underlying host record.
    #[must_use]
    pub fn into_record(self) -> R {
        self.record
    }

    /// Retrieves the index identifying this entry within its owning
    /// collection.
    ///
    /// # Errors
    ///
    /// Propagates `AccessFailure` from the positional access collaborator.
    pub fn index(&self) -> Result<i32> {
        self.record.read_int(SLOT_INDEX)
    }

    /// Sets the entry's index.
    ///
    /// # Errors
    ///
    /// Propagates `AccessFailure` from the positional access collaborator.
    pub fn set_index(&mut self, index: i32) -> Result<()> {
        self.record.write_int(SLOT_INDEX, index)
    }

    /// Retrieves the numeric tag identifying the storage type of the
    /// value.
    ///
    /// # Errors
    ///
    /// Propagates `AccessFailure` from the positional access collaborator.
    pub fn type_id(&self) -> Result<i32> {
        self.record.read_int(SLOT_TYPE_ID)
    }

    /// Sets the raw type id.
    ///
    /// Low-level escape hatch: the resolved-type cache is not invalidated,
    /// so an entry whose type was already resolved keeps answering with
    /// the old type.
    ///
    /// # Errors
    ///
    /// Propagates `AccessFailure` from the positional access collaborator.
    pub fn set_type_id(&mut self, id: i32) -> Result<()> {
        self.record.write_int(SLOT_TYPE_ID, id)
    }

    /// Retrieves whether the value must still be synchronized to
    /// observers.
    ///
    /// # Errors
    ///
    /// Propagates `AccessFailure` from the positional access collaborator.
    pub fn dirty(&self) -> Result<bool> {
        self.record.read_bool(SLOT_DIRTY)
    }

    /// Sets the dirty flag. Never inferred; always set explicitly.
    ///
    /// # Errors
    ///
    /// Propagates `AccessFailure` from the positional access collaborator.
    pub fn set_dirty(&mut self, dirty: bool) -> Result<()> {
        self.record.write_bool(SLOT_DIRTY, dirty)
    }

    /// Resolves the external-facing type of the stored value.
    ///
    /// Resolved once per entry and cached; host composite types are
    /// reported as their external wrapper types.
    ///
    /// # Errors
    ///
    /// Fails with `UnrecognizedType` if the stored id has no registered
    /// type. That indicates registry or record corruption, not ordinary
    /// misuse.
    pub fn get_type(&self, registry: &TypeRegistry) -> Result<Type> {
        if let Some(ty) = self.resolved.get() {
            return Ok(*ty);
        }
        let id = self.type_id()?;
        let ty = registry
            .type_for(id)
            .ok_or_else(|| Error::unrecognized_type(id))?
            .wrapped();
        // A concurrent fill is impossible (single owner); ignore the race
        // result either way.
        let _ = self.resolved.set(ty);
        Ok(ty)
    }

    /// Reads the watched value in external form.
    ///
    /// # Errors
    ///
    /// Propagates `AccessFailure` from the positional access collaborator.
    pub fn value(&self) -> Result<Value> {
        Ok(convert::wrap(self.record.read_value(SLOT_VALUE)?))
    }

    /// Updates the watched value.
    ///
    /// Validates that the new value is assignable to the entry's declared
    /// type before anything is written. When `update_observers` is true the
    /// dirty flag is set *before* the value, so an observer never sees the
    /// new value with a stale flag.
    ///
    /// # Errors
    ///
    /// Fails with `TypeMismatch` (nothing mutated), `UnrecognizedType`, or
    /// a propagated `AccessFailure`.
    pub fn set_value(
        &mut self,
        value: Value,
        registry: &TypeRegistry,
        update_observers: bool,
    ) -> Result<()> {
        let expected = self.get_type(registry)?;
        let actual = value.value_type();
        if !expected.accepts(actual) {
            return Err(Error::type_mismatch(expected, actual));
        }
        if update_observers {
            self.set_dirty(true)?;
        }
        self.record.write_value(SLOT_VALUE, convert::unwrap(value))
    }
}

impl<R: RecordAccess + BlankRecord> WatchedEntry<R> {
    /// Constructs a fresh entry from an index and a value.
    ///
    /// The type id is derived from the value's type via the registry; the
    /// host record is built with `(type_id, index, host form)` and a clean
    /// dirty flag.
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedType` if the value's type has no registered
    /// id; no entry comes into existence.
    pub fn from_value(index: i32, value: Value, registry: &TypeRegistry) -> Result<Self> {
        let ty = value.value_type();
        let id = registry.id_for(ty).ok_or_else(|| Error::unsupported_type(ty))?;

        let mut record = R::blank();
        record.write_int(SLOT_TYPE_ID, id)?;
        record.write_int(SLOT_INDEX, index)?;
        record.write_value(SLOT_VALUE, convert::unwrap(value))?;
        Ok(Self::new(record))
    }

    /// Deep-clones this entry, along with the contained value.
    ///
    /// The clone gets a blank record, the dirty flag, index, and type id
    /// copied verbatim, and a type-specific duplicate of the value written
    /// without updating observers. Composite values share no mutable state
    /// with the original afterwards.
    ///
    /// # Errors
    ///
    /// Propagates `UnrecognizedType` or `AccessFailure`.
    pub fn deep_clone(&self, registry: &TypeRegistry) -> Result<Self> {
        let mut clone = Self::new(R::blank());
        clone.set_dirty(self.dirty()?)?;
        clone.set_index(self.index()?)?;
        clone.set_type_id(self.type_id()?)?;

        let duplicate = convert::wrap(convert::clone_host(&self.record.read_value(SLOT_VALUE)?));
        clone.set_value(duplicate, registry, false)?;
        Ok(clone)
    }
}
