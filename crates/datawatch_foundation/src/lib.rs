//! Core value, type, and error types for datawatch.
//!
//! This crate provides:
//! - [`Value`] / [`HostValue`] - External and host-native payload forms
//! - [`Type`] - The closed type universe shared by both sides
//! - [`ItemStack`] / [`Position`] - Wrappers over composite host records
//! - [`Error`] - Fail-fast error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod position;
mod stack;
mod types;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use position::{Position, TripleData, TripleHandle};
pub use stack::{ItemStack, StackData, StackHandle};
pub use types::{Projection, Type};
pub use value::{HostValue, Value};
