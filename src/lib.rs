//! Datawatch - typed access to positionally-encoded watched records
//!
//! This crate re-exports both layers of the datawatch system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: datawatch_core       - entry wrapper, type registry, conversion
//! Layer 0: datawatch_foundation - core types (Value, Type, Error)
//! ```

pub use datawatch_core as core;
pub use datawatch_foundation as foundation;
