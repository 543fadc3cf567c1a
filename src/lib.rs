//! recordkit - validated construction of strongly-typed records
//!
//! Records are built from an ordered list of runtime-typed [`Value`]s. The
//! values are checked against the record type's [`TypeSignature`] (arity and
//! per-position kind, no coercion) before anything is constructed; on
//! disagreement a [`TypeMismatchError`] renders both sides.
//!
//! # Quick Start
//!
//! ```
//! use recordkit::{arguments, ArgumentConstructible, Book};
//!
//! let book = Book::construct(arguments!["the great gatsby", "F. Scott Fitzgerald", 1896, 180, 12.99])?;
//! assert_eq!(book.title(), "The Great Gatsby");
//!
//! let err = Book::construct(arguments!["title", "Author Name", "1896-not-an-int", 180, 12.99]).unwrap_err();
//! assert_eq!(err.expected(), "(name: String, birthYear: Int)");
//! # Ok::<(), recordkit::TypeMismatchError>(())
//! ```
//!
//! # Architecture
//!
//! - `recordkit-core`: value model, signatures, validator, display, registry
//! - `recordkit-records`: the built-in `Author`, `Book` and `Car` records

pub use recordkit_core::*;
pub use recordkit_core::arguments;
pub use recordkit_records::{builtin_registry, register_builtin, Author, Book, Car};
