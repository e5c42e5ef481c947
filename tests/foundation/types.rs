//! Integration tests for Type descriptors
//!
//! Tests the closed type universe, the host/external mapping, and
//! assignability.

use datawatch_foundation::{Projection, Type};

const ALL_TYPES: [Type; 8] = [
    Type::Byte,
    Type::Short,
    Type::Int,
    Type::Float,
    Type::String,
    Type::Stack,
    Type::Triple,
    Type::Position,
];

// =============================================================================
// Host <-> external mapping
// =============================================================================

#[test]
fn only_the_triple_wraps() {
    for ty in ALL_TYPES {
        if ty == Type::Triple {
            assert_eq!(ty.wrapped(), Type::Position);
        } else {
            assert_eq!(ty.wrapped(), ty);
        }
    }
}

#[test]
fn only_the_position_unwraps() {
    for ty in ALL_TYPES {
        if ty == Type::Position {
            assert_eq!(ty.unwrapped(), Type::Triple);
        } else {
            assert_eq!(ty.unwrapped(), ty);
        }
    }
}

#[test]
fn wrap_unwrap_round_trip_on_host_types() {
    for ty in ALL_TYPES {
        if ty != Type::Position {
            assert_eq!(ty.wrapped().unwrapped(), ty);
        }
    }
}

// =============================================================================
// Assignability
// =============================================================================

#[test]
fn accepts_is_reflexive_and_exact() {
    for expected in ALL_TYPES {
        for actual in ALL_TYPES {
            assert_eq!(expected.accepts(actual), expected == actual);
        }
    }
}

#[test]
fn host_and_wrapper_types_are_not_interchangeable() {
    assert!(!Type::Position.accepts(Type::Triple));
    assert!(!Type::Triple.accepts(Type::Position));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn type_display_names() {
    assert_eq!(format!("{}", Type::Byte), "byte");
    assert_eq!(format!("{}", Type::Stack), "stack");
    assert_eq!(format!("{}", Type::Triple), "triple");
    assert_eq!(format!("{}", Type::Position), "position");
}

#[test]
fn projection_display_names() {
    assert_eq!(format!("{}", Projection::Int), "int");
    assert_eq!(format!("{}", Projection::Bool), "bool");
    assert_eq!(format!("{}", Projection::Value), "value");
}
