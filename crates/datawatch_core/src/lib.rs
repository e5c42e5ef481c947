//! Watched-entry wrapper, type registry, and conversion dispatch for datawatch.
//!
//! This crate provides:
//! - [`WatchedEntry`] - Typed, validated access to one watched host record
//! - [`TypeRegistry`] - The numeric type-id registry (Type Bridge)
//! - [`RecordAccess`] / [`HostRecord`] - The positional record seam
//! - [`wrap`] / [`unwrap`] / [`clone_host`] - Host and external value forms

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod convert;
mod entry;
mod record;
mod registry;

pub use convert::{Converter, StackConverter, TripleConverter, clone_host, unwrap, wrap};
pub use entry::WatchedEntry;
pub use record::{
    BlankRecord, HostRecord, RecordAccess, SLOT_DIRTY, SLOT_INDEX, SLOT_TYPE_ID, SLOT_VALUE,
};
pub use registry::TypeRegistry;
