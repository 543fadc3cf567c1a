//! Error types for recordkit
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! - [`TypeMismatchError`]: the sole validation failure, covering both arity
//!   and per-position kind mismatches
//! - [`Error`]: registry and signature-definition failures, wrapping
//!   `TypeMismatchError` unchanged when construction itself fails

use serde::Serialize;
use thiserror::Error;

/// Result type alias for recordkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// An argument list did not match a record type's signature.
///
/// Both sides are snapshots rendered at the moment of failure: `expected`
/// is the rendered [`TypeSignature`](crate::TypeSignature) and `actual` is
/// the rendered kind sequence of the entire supplied argument list.
///
/// The `Display` text is a stable contract:
///
/// ```text
/// Invalid argument types. Expected (name: String, birthYear: Int), but got (Int, Bool). Verify that the declared type signature matches the values you intend to unpack.
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error(
    "Invalid argument types. Expected {expected}, but got {actual}. \
     Verify that the declared type signature matches the values you intend to unpack."
)]
pub struct TypeMismatchError {
    expected: String,
    actual: String,
}

impl TypeMismatchError {
    pub(crate) fn new(expected: String, actual: String) -> Self {
        Self { expected, actual }
    }

    /// Rendered signature of the directly-invoked record type
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Rendered kind sequence of the supplied arguments
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// The canonical error description (same as `to_string()`)
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// Error types for signature definition and registry lookups
#[derive(Debug, Error)]
pub enum Error {
    /// Supplied arguments did not match the record type's signature
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),

    /// No record type is registered under this name
    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    /// A record type with this name is already registered
    #[error("Record type already defined: {0}")]
    DuplicateRecordType(String),

    /// A signature mixed labeled and unlabeled slots
    #[error("Signature mixes labeled and unlabeled slots")]
    MixedLabels,

    /// A labeled signature used the same label twice
    #[error("Duplicate slot label: {0}")]
    DuplicateLabel(String),

    /// A kind name did not match any value kind
    #[error("Unknown value kind '{0}'. Expected one of String, Int, Double, Bool")]
    UnknownKind(String),

    /// A record type's build tuple does not unpack its own signature
    #[error("Record type {record_type} declares {signature} but builds from {build}")]
    BuildTupleMismatch {
        /// Name the type was being registered under
        record_type: String,
        /// Rendered declared signature
        signature: String,
        /// Rendered kinds of the build tuple
        build: String,
    },

    /// Invalid input (empty names and similar)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
