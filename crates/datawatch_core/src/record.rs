//! Positional access to host records.
//!
//! The host lays a watched record out by slot position, not by field name.
//! Each declared primitive type gets its own projection of the record, and
//! all reads and writes go through those typed projections. The layout is a
//! construction-time contract shared with the host:
//!
//! | Projection | Slot | Field     |
//! |------------|------|-----------|
//! | int        | 0    | type id   |
//! | int        | 1    | index     |
//! | bool       | 0    | dirty     |
//! | value      | 0    | payload   |

use datawatch_foundation::{Error, HostValue, Projection, Result};

/// Int-projection slot holding the type id.
pub const SLOT_TYPE_ID: usize = 0;
/// Int-projection slot holding the index.
pub const SLOT_INDEX: usize = 1;
/// Bool-projection slot holding the dirty flag.
pub const SLOT_DIRTY: usize = 0;
/// Value-projection slot holding the payload.
pub const SLOT_VALUE: usize = 0;

/// Positional, typed access to one host record.
///
/// Implementations report [`ErrorKind::AccessFailure`] when a projection
/// has no such slot; callers surface that verbatim and never retry.
///
/// [`ErrorKind::AccessFailure`]: datawatch_foundation::ErrorKind::AccessFailure
pub trait RecordAccess {
    /// Reads the int projection at `slot`.
    ///
    /// # Errors
    ///
    /// Fails with `AccessFailure` if the projection has no such slot.
    fn read_int(&self, slot: usize) -> Result<i32>;

    /// Writes the int projection at `slot`.
    ///
    /// # Errors
    ///
    /// Fails with `AccessFailure` if the projection has no such slot.
    fn write_int(&mut self, slot: usize, value: i32) -> Result<()>;

    /// Reads the bool projection at `slot`.
    ///
    /// # Errors
    ///
    /// Fails with `AccessFailure` if the projection has no such slot.
    fn read_bool(&self, slot: usize) -> Result<bool>;

    /// Writes the bool projection at `slot`.
    ///
    /// # Errors
    ///
    /// Fails with `AccessFailure` if the projection has no such slot.
    fn write_bool(&mut self, slot: usize, value: bool) -> Result<()>;

    /// Reads the value projection at `slot`.
    ///
    /// # Errors
    ///
    /// Fails with `AccessFailure` if the projection has no such slot.
    fn read_value(&self, slot: usize) -> Result<HostValue>;

    /// Writes the value projection at `slot`.
    ///
    /// # Errors
    ///
    /// Fails with `AccessFailure` if the projection has no such slot.
    fn write_value(&mut self, slot: usize, value: HostValue) -> Result<()>;
}

/// Factory for blank host records.
///
/// Consumed by fresh entry construction and deep cloning; the registry and
/// every record must exist before any entry is built.
pub trait BlankRecord {
    /// Returns a blank record: zeroed ids, a byte-zero payload, clean
    /// dirty flag.
    fn blank() -> Self;
}

/// In-memory host record with the standard watched-entry layout.
#[derive(Clone, Debug, PartialEq)]
pub struct HostRecord {
    type_id: i32,
    index: i32,
    value: HostValue,
    dirty: bool,
}

impl HostRecord {
    /// Creates a record with the given fields and a clean dirty flag.
    #[must_use]
    pub fn new(type_id: i32, index: i32, value: HostValue) -> Self {
        Self {
            type_id,
            index,
            value,
            dirty: false,
        }
    }
}

impl RecordAccess for HostRecord {
    fn read_int(&self, slot: usize) -> Result<i32> {
        match slot {
            SLOT_TYPE_ID => Ok(self.type_id),
            SLOT_INDEX => Ok(self.index),
            _ => Err(Error::access_failure(Projection::Int, slot)),
        }
    }

    fn write_int(&mut self, slot: usize, value: i32) -> Result<()> {
        match slot {
            SLOT_TYPE_ID => self.type_id = value,
            SLOT_INDEX => self.index = value,
            _ => return Err(Error::access_failure(Projection::Int, slot)),
        }
        Ok(())
    }

    fn read_bool(&self, slot: usize) -> Result<bool> {
        match slot {
            SLOT_DIRTY => Ok(self.dirty),
            _ => Err(Error::access_failure(Projection::Bool, slot)),
        }
    }

    fn write_bool(&mut self, slot: usize, value: bool) -> Result<()> {
        match slot {
            SLOT_DIRTY => {
                self.dirty = value;
                Ok(())
            }
            _ => Err(Error::access_failure(Projection::Bool, slot)),
        }
    }

    fn read_value(&self, slot: usize) -> Result<HostValue> {
        match slot {
            SLOT_VALUE => Ok(self.value.clone()),
            _ => Err(Error::access_failure(Projection::Value, slot)),
        }
    }

    fn write_value(&mut self, slot: usize, value: HostValue) -> Result<()> {
        match slot {
            SLOT_VALUE => {
                self.value = value;
                Ok(())
            }
            _ => Err(Error::access_failure(Projection::Value, slot)),
        }
    }
}

impl BlankRecord for HostRecord {
    fn blank() -> Self {
        Self::new(0, 0, HostValue::Byte(0))
    }
}
