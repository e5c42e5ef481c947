//! Coordinate payloads: the host triple record and its external wrapper.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shared handle to a host coordinate-triple record.
pub type TripleHandle = Rc<RefCell<TripleData>>;

/// Contents of a host coordinate-triple record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TripleData {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl TripleData {
    /// Creates a new coordinate-triple record.
    #[must_use]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Moves this record behind a shared handle.
    #[must_use]
    pub fn into_handle(self) -> TripleHandle {
        Rc::new(RefCell::new(self))
    }
}

/// External coordinate wrapper value.
#[derive(Clone)]
pub struct Position {
    handle: TripleHandle,
}

impl Position {
    /// Creates a position over a fresh host record.
    #[must_use]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self::from_handle(TripleData::new(x, y, z).into_handle())
    }

    /// Wraps an existing host record.
    #[must_use]
    pub fn from_handle(handle: TripleHandle) -> Self {
        Self { handle }
    }

    /// Returns the underlying host record handle.
    #[must_use]
    pub fn handle(&self) -> &TripleHandle {
        &self.handle
    }

    /// Consumes the wrapper, returning the host record handle.
    #[must_use]
    pub fn into_handle(self) -> TripleHandle {
        self.handle
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.handle.borrow().x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> i32 {
        self.handle.borrow().y
    }

    /// Returns the Z coordinate.
    #[must_use]
    pub fn z(&self) -> i32 {
        self.handle.borrow().z
    }

    /// Sets the X coordinate.
    pub fn set_x(&self, x: i32) {
        self.handle.borrow_mut().x = x;
    }

    /// Sets the Y coordinate.
    pub fn set_y(&self, y: i32) {
        self.handle.borrow_mut().y = y;
    }

    /// Sets the Z coordinate.
    pub fn set_z(&self, z: i32) {
        self.handle.borrow_mut().z = z;
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        *self.handle.borrow() == *other.handle.borrow()
    }
}

impl Eq for Position {}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.handle.borrow();
        write!(f, "Position({}, {}, {})", data.x, data.y, data.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.handle.borrow();
        write!(f, "({}, {}, {})", data.x, data.y, data.z)
    }
}
