//! Integration tests for the conversion dispatch
//!
//! Round-trip and clone-strategy properties for every row of the
//! conversion table.

use std::rc::Rc;

use datawatch_core::{Converter, StackConverter, TripleConverter, clone_host, unwrap, wrap};
use datawatch_foundation::{
    HostValue, ItemStack, Position, StackData, TripleData, Type, Value,
};

// =============================================================================
// Wrapping
// =============================================================================

#[test]
fn primitives_pass_through_unchanged() {
    assert_eq!(wrap(HostValue::Byte(1)), Value::Byte(1));
    assert_eq!(wrap(HostValue::Short(2)), Value::Short(2));
    assert_eq!(wrap(HostValue::Int(3)), Value::Int(3));
    assert_eq!(wrap(HostValue::Float(4.0)), Value::Float(4.0));
    assert_eq!(wrap(HostValue::String("s".into())), Value::from("s"));
}

#[test]
fn stack_record_wraps_to_an_external_stack() {
    let host = HostValue::Stack(StackData::new(264, 3, 0).into_handle());
    let Value::Stack(stack) = wrap(host) else {
        panic!("expected a stack value");
    };
    assert_eq!(stack.item_id(), 264);
    assert_eq!(stack.count(), 3);
}

#[test]
fn triple_record_wraps_to_a_position() {
    let host = HostValue::Triple(TripleData::new(7, 8, 9).into_handle());
    let Value::Position(pos) = wrap(host) else {
        panic!("expected a position value");
    };
    assert_eq!((pos.x(), pos.y(), pos.z()), (7, 8, 9));
}

#[test]
fn position_unwraps_to_a_triple_record() {
    let host = unwrap(Value::Position(Position::new(1, 2, 3)));
    assert_eq!(host.host_type(), Type::Triple);
    assert_eq!(host, HostValue::Triple(TripleData::new(1, 2, 3).into_handle()));
}

// =============================================================================
// Round-trip properties
// =============================================================================

#[test]
fn external_round_trip_is_idempotent() {
    let values = [
        Value::Byte(-5),
        Value::Int(42),
        Value::from("round"),
        Value::Stack(ItemStack::new(1, 64, 5)),
        Value::Position(Position::new(-1, 0, 1)),
    ];
    for v in values {
        let once = wrap(unwrap(v));
        let twice = wrap(unwrap(once.clone()));
        assert_eq!(once, twice);
    }
}

#[test]
fn host_round_trip_preserves_contents() {
    let hosts = [
        HostValue::Short(17),
        HostValue::Stack(StackData::new(2, 16, 0).into_handle()),
        HostValue::Triple(TripleData::new(4, 5, 6).into_handle()),
    ];
    for h in hosts {
        assert_eq!(unwrap(wrap(h.clone())), h);
    }
}

// =============================================================================
// Converters
// =============================================================================

#[test]
fn stack_converter_passes_the_handle_through() {
    let handle = StackData::new(1, 64, 0).into_handle();
    let stack = StackConverter::to_external(Rc::clone(&handle));
    let back = StackConverter::to_host(stack);
    assert!(Rc::ptr_eq(&handle, &back));
}

#[test]
fn triple_converter_copies_in_both_directions() {
    let handle = TripleData::new(1, 2, 3).into_handle();
    let pos = TripleConverter::to_external(Rc::clone(&handle));
    let back = TripleConverter::to_host(pos);

    assert_eq!(*back.borrow(), *handle.borrow());
    assert!(!Rc::ptr_eq(&handle, &back));
}

// =============================================================================
// Clone strategies
// =============================================================================

#[test]
fn stack_clone_delegates_to_duplication() {
    let handle = StackData::new(1, 64, 0).into_handle();
    let HostValue::Stack(copy) = clone_host(&HostValue::Stack(Rc::clone(&handle))) else {
        panic!("expected a stack value");
    };

    assert!(!Rc::ptr_eq(&handle, &copy));
    copy.borrow_mut().damage = 77;
    assert_eq!(handle.borrow().damage, 0);
}

#[test]
fn triple_clone_round_trips_to_a_fresh_record() {
    let handle = TripleData::new(1, 2, 3).into_handle();
    let HostValue::Triple(copy) = clone_host(&HostValue::Triple(Rc::clone(&handle))) else {
        panic!("expected a triple value");
    };

    assert!(!Rc::ptr_eq(&handle, &copy));
    assert_eq!(*copy.borrow(), *handle.borrow());
}

#[test]
fn immutable_clones_share_storage() {
    let s: std::sync::Arc<str> = "immutable".into();
    let HostValue::String(copy) = clone_host(&HostValue::String(s.clone())) else {
        panic!("expected a string value");
    };
    assert!(std::sync::Arc::ptr_eq(&s, &copy));
}
