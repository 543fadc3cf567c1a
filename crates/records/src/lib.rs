//! Built-in record types for recordkit
//!
//! - [`Author`]: `(name: String, birthYear: Int)`
//! - [`Book`]: `(title: String, authorName: String, authorBirthYear: Int, pageCount: Int, price: Double)`,
//!   a composite embedding an `Author`
//! - [`Car`]: `(make: String, model: String, year: Int, price: Double)`

#![warn(missing_docs)]

pub mod author;
pub mod book;
pub mod car;

pub use author::Author;
pub use book::Book;
pub use car::Car;

use recordkit_core::{RecordRegistry, Result};
use tracing::debug;

/// Register the built-in record types into `registry`.
///
/// # Errors
///
/// Fails if any built-in name is already registered.
pub fn register_builtin(registry: &mut RecordRegistry) -> Result<()> {
    registry.register::<Author>("Author")?;
    registry.register::<Book>("Book")?;
    registry.register::<Car>("Car")?;
    debug!(target: "recordkit::records", count = registry.len(), "Built-in record types registered");
    Ok(())
}

/// A registry containing only the built-in record types.
pub fn builtin_registry() -> RecordRegistry {
    let mut registry = RecordRegistry::new();
    // An empty registry has no conflicting names
    let _ = register_builtin(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordkit_core::{arguments, Error};

    #[test]
    fn test_builtin_names() {
        let registry = builtin_registry();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["Author", "Book", "Car"]
        );
    }

    #[test]
    fn test_register_twice_fails() {
        let mut registry = builtin_registry();
        assert!(matches!(
            register_builtin(&mut registry),
            Err(Error::DuplicateRecordType(name)) if name == "Author"
        ));
    }

    #[test]
    fn test_registry_construct_book() {
        let registry = builtin_registry();
        let book = registry
            .construct(
                "Book",
                arguments!["the great gatsby", "F. Scott Fitzgerald", 1896, 180, 12.99],
            )
            .unwrap();
        assert_eq!(book.type_name(), "Book");
        assert_eq!(book.fields().len(), 4);
    }

    #[test]
    fn test_registry_surfaces_embedded_error_unchanged() {
        let registry = builtin_registry();
        match registry.construct("Book", arguments!["t", "a", "x", 1, 1.0]) {
            Err(Error::TypeMismatch(e)) => {
                assert_eq!(e.expected(), "(name: String, birthYear: Int)")
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
    }
}
