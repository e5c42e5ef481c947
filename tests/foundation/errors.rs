//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use datawatch_foundation::{Error, ErrorKind, Projection, Type};

// =============================================================================
// Error construction
// =============================================================================

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(Type::Position, Type::Triple);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("position"));
    assert!(msg.contains("triple"));
}

#[test]
fn error_unsupported_type() {
    let err = Error::unsupported_type(Type::Stack);
    assert!(matches!(err.kind, ErrorKind::UnsupportedType(Type::Stack)));
    let msg = format!("{err}");
    assert!(msg.contains("stack"));
    assert!(msg.contains("no registered type id"));
}

#[test]
fn error_unrecognized_type() {
    let err = Error::unrecognized_type(17);
    assert!(matches!(err.kind, ErrorKind::UnrecognizedType(17)));
    assert!(format!("{err}").contains("17"));
}

#[test]
fn error_access_failure() {
    let err = Error::access_failure(Projection::Value, 2);
    assert!(matches!(
        err.kind,
        ErrorKind::AccessFailure {
            projection: Projection::Value,
            slot: 2,
        }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("value"));
    assert!(msg.contains('2'));
}

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("bad converter input");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
    assert!(format!("{err}").contains("bad converter input"));
}

#[test]
fn error_duplicate_type_id() {
    let err = Error::duplicate_type_id(3);
    assert!(matches!(err.kind, ErrorKind::DuplicateTypeId { id: 3 }));
    assert!(format!("{err}").contains('3'));
}

#[test]
fn errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::unrecognized_type(1));
}
