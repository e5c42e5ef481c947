//! Item-stack payloads: the composite host record and its external wrapper.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shared handle to a host item-stack record.
///
/// Cloning the handle copies the reference, not the record, matching the
/// host's reference semantics for composite values.
pub type StackHandle = Rc<RefCell<StackData>>;

/// Contents of a host item-stack record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StackData {
    /// Numeric item identifier.
    pub item_id: i32,
    /// Number of items in the stack.
    pub count: i32,
    /// Damage / durability value.
    pub damage: i16,
}

impl StackData {
    /// Creates a new item-stack record.
    #[must_use]
    pub fn new(item_id: i32, count: i32, damage: i16) -> Self {
        Self {
            item_id,
            count,
            damage,
        }
    }

    /// Moves this record behind a shared handle.
    #[must_use]
    pub fn into_handle(self) -> StackHandle {
        Rc::new(RefCell::new(self))
    }

    /// The stack's own deep copy: an independent record with the same
    /// contents, behind a fresh handle.
    #[must_use]
    pub fn duplicate(&self) -> StackHandle {
        self.clone().into_handle()
    }
}

/// External item-stack value.
///
/// Wraps the host record's handle, so mutation through the wrapper is
/// visible through the record and vice versa.
#[derive(Clone)]
pub struct ItemStack {
    handle: StackHandle,
}

impl ItemStack {
    /// Creates a stack over a fresh host record.
    #[must_use]
    pub fn new(item_id: i32, count: i32, damage: i16) -> Self {
        Self::from_handle(StackData::new(item_id, count, damage).into_handle())
    }

    /// Wraps an existing host record.
    #[must_use]
    pub fn from_handle(handle: StackHandle) -> Self {
        Self { handle }
    }

    /// Returns the underlying host record handle.
    #[must_use]
    pub fn handle(&self) -> &StackHandle {
        &self.handle
    }

    /// Consumes the wrapper, returning the host record handle.
    #[must_use]
    pub fn into_handle(self) -> StackHandle {
        self.handle
    }

    /// Returns the numeric item identifier.
    #[must_use]
    pub fn item_id(&self) -> i32 {
        self.handle.borrow().item_id
    }

    /// Returns the number of items in the stack.
    #[must_use]
    pub fn count(&self) -> i32 {
        self.handle.borrow().count
    }

    /// Sets the number of items in the stack.
    pub fn set_count(&self, count: i32) {
        self.handle.borrow_mut().count = count;
    }

    /// Returns the damage value.
    #[must_use]
    pub fn damage(&self) -> i16 {
        self.handle.borrow().damage
    }

    /// Sets the damage value.
    pub fn set_damage(&self, damage: i16) {
        self.handle.borrow_mut().damage = damage;
    }
}

impl PartialEq for ItemStack {
    fn eq(&self, other: &Self) -> bool {
        *self.handle.borrow() == *other.handle.borrow()
    }
}

impl Eq for ItemStack {}

impl fmt::Debug for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.handle.borrow();
        write!(
            f,
            "ItemStack(id={}, count={}, damage={})",
            data.item_id, data.count, data.damage
        )
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.handle.borrow();
        write!(f, "{}x#{}", data.count, data.item_id)
    }
}
