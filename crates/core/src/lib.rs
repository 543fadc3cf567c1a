//! Core types and traits for recordkit
//!
//! This crate defines the validate-then-construct primitive:
//! - Value / ValueKind: Tagged runtime values and their kinds
//! - TypeSignature: Ordered, immutable expected shape of a record type
//! - Validator: `TypeSignature::validate` producing a `ValidatedTuple`
//! - TypeMismatchError: The single, renderable validation failure
//! - ArgumentConstructible: Per-record signature + build contract
//! - Record: Explicit field listing for the reflective debug dump
//! - RecordRegistry: Name → signature/constructor mapping for runtime use

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod construct;
pub mod describe;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod render;
pub mod signature;
pub mod validate;
pub mod value;

// Re-export commonly used types and traits
pub use construct::{delegate, ArgumentConstructible};
pub use describe::{
    describe, describe_with, to_json, write_instance, DescribeOptions, Field, FieldValue, Record,
};
pub use error::{Error, Result, TypeMismatchError};
pub use registry::{DynamicRecord, RecordRegistry};
pub use signature::{SignatureSlot, TypeSignature};
pub use validate::ValidatedTuple;
pub use value::{FromValue, Unpack, Value, ValueKind};
