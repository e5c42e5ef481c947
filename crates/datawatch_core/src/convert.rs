//! Conversion dispatch between host and external value forms.
//!
//! Two closed, type-indexed dispatch tables: [`wrap`] / [`unwrap`] translate
//! values between the host's native representation and the external one,
//! and [`clone_host`] applies the per-type deep-clone strategy. Both are
//! total over the special set and identity everywhere else; new special
//! types are added as table rows, not as branching logic elsewhere.

use datawatch_foundation::{HostValue, ItemStack, Position, StackHandle, TripleData, TripleHandle, Value};

/// Bidirectional converter between a host form and its external form.
pub trait Converter {
    /// Host-native representation.
    type Host;
    /// External representation.
    type External;

    /// Converts the host form into its external equivalent.
    fn to_external(host: Self::Host) -> Self::External;

    /// Converts the external form back into its host equivalent.
    fn to_host(external: Self::External) -> Self::Host;
}

/// Converter for composite item-stack records.
///
/// Both directions pass the record handle through, so the external stack
/// stays a live view of the host record.
pub struct StackConverter;

impl Converter for StackConverter {
    type Host = StackHandle;
    type External = ItemStack;

    fn to_external(host: StackHandle) -> ItemStack {
        ItemStack::from_handle(host)
    }

    fn to_host(external: ItemStack) -> StackHandle {
        external.into_handle()
    }
}

/// Converter for coordinate-triple records.
///
/// Converts by value in both directions: each conversion builds a fresh
/// record, which is what makes the round-trip clone strategy yield an
/// independent copy.
pub struct TripleConverter;

impl Converter for TripleConverter {
    type Host = TripleHandle;
    type External = Position;

    fn to_external(host: TripleHandle) -> Position {
        let data = host.borrow();
        Position::new(data.x, data.y, data.z)
    }

    fn to_host(external: Position) -> TripleHandle {
        TripleData::new(external.x(), external.y(), external.z()).into_handle()
    }
}

/// Maps a host-form value to its external form.
///
/// Composite records go through their converters; primitives and strings
/// pass through unchanged.
#[must_use]
pub fn wrap(host: HostValue) -> Value {
    match host {
        HostValue::Byte(v) => Value::Byte(v),
        HostValue::Short(v) => Value::Short(v),
        HostValue::Int(v) => Value::Int(v),
        HostValue::Float(v) => Value::Float(v),
        HostValue::String(s) => Value::String(s),
        HostValue::Stack(handle) => Value::Stack(StackConverter::to_external(handle)),
        HostValue::Triple(handle) => Value::Position(TripleConverter::to_external(handle)),
    }
}

/// Maps an external-form value back to its host form.
///
/// Inverse of [`wrap`].
#[must_use]
pub fn unwrap(value: Value) -> HostValue {
    match value {
        Value::Byte(v) => HostValue::Byte(v),
        Value::Short(v) => HostValue::Short(v),
        Value::Int(v) => HostValue::Int(v),
        Value::Float(v) => HostValue::Float(v),
        Value::String(s) => HostValue::String(s),
        Value::Stack(stack) => HostValue::Stack(StackConverter::to_host(stack)),
        Value::Position(pos) => HostValue::Triple(TripleConverter::to_host(pos)),
    }
}

/// Applies the per-type deep-clone strategy to a host value.
///
/// Stacks delegate to their own duplication; triples round-trip through
/// the converter, which builds a fresh record; immutable values are copied
/// by reference since they cannot be mutated through either handle.
#[must_use]
pub fn clone_host(value: &HostValue) -> HostValue {
    match value {
        HostValue::Stack(handle) => HostValue::Stack(handle.borrow().duplicate()),
        HostValue::Triple(handle) => {
            let external = TripleConverter::to_external(handle.clone());
            HostValue::Triple(TripleConverter::to_host(external))
        }
        other => other.clone(),
    }
}
