//! Runtime record registry
//!
//! Maps a record-type identifier to its signature and a constructor that
//! yields a boxed [`Record`]. Statically typed records are added with
//! [`RecordRegistry::register`]; record types known only at runtime (for
//! example from a configuration file) are added with
//! [`RecordRegistry::define_signature`] and produce [`DynamicRecord`]s.
//!
//! Construction takes `&self`, so a fully populated registry can be shared
//! between threads without locking.

use crate::construct::ArgumentConstructible;
use crate::describe::{Field, Record};
use crate::error::{Error, Result, TypeMismatchError};
use crate::signature::{SignatureSlot, TypeSignature};
use crate::render::render_kinds;
use crate::value::{Unpack, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

type Constructor =
    Arc<dyn Fn(Vec<Value>) -> std::result::Result<Box<dyn Record>, TypeMismatchError> + Send + Sync>;

struct Entry {
    signature: TypeSignature,
    constructor: Constructor,
}

/// Registry of constructible record types, keyed by name
#[derive(Default)]
pub struct RecordRegistry {
    entries: BTreeMap<String, Entry>,
}

impl fmt::Debug for RecordRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, e)| (k, e.signature.render())))
            .finish()
    }
}

impl RecordRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a statically typed record under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRecordType`] if `name` is taken,
    /// [`Error::InvalidInput`] if it is empty, or
    /// [`Error::BuildTupleMismatch`] if `T::Arguments` does not unpack
    /// `T::signature()`.
    pub fn register<T>(&mut self, name: &str) -> Result<()>
    where
        T: ArgumentConstructible + Record + 'static,
    {
        let build_kinds = <T::Arguments as Unpack>::kinds();
        if build_kinds != T::signature().kinds() {
            return Err(Error::BuildTupleMismatch {
                record_type: name.to_string(),
                signature: T::signature().render(),
                build: render_kinds(build_kinds),
            });
        }
        let constructor: Constructor = Arc::new(|arguments: Vec<Value>| {
            T::construct(arguments).map(|record| Box::new(record) as Box<dyn Record>)
        });
        self.insert(name, T::signature().clone(), constructor)
    }

    /// Define a record type at runtime from its slots.
    ///
    /// Instances are [`DynamicRecord`]s whose field labels are the slot
    /// labels, or positional indices (`0`, `1`, ...) for an unlabeled
    /// signature.
    ///
    /// # Errors
    ///
    /// Fails if the slots mix labeled and unlabeled forms, repeat a label,
    /// or if `name` is empty or already taken.
    pub fn define_signature(
        &mut self,
        name: &str,
        slots: Vec<SignatureSlot>,
    ) -> Result<TypeSignature> {
        let signature = TypeSignature::define(slots)?;
        let labels: Arc<[String]> = signature
            .slots()
            .iter()
            .enumerate()
            .map(|(i, slot)| slot.label().map_or_else(|| i.to_string(), str::to_string))
            .collect();

        let type_name: Arc<str> = Arc::from(name);
        let validator = signature.clone();
        let constructor: Constructor = Arc::new(
            move |arguments: Vec<Value>| -> std::result::Result<Box<dyn Record>, TypeMismatchError> {
                let values = validator.validate(arguments)?.into_values();
                Ok(Box::new(DynamicRecord {
                    type_name: Arc::clone(&type_name),
                    labels: Arc::clone(&labels),
                    values,
                }))
            },
        );

        self.insert(name, signature.clone(), constructor)?;
        Ok(signature)
    }

    fn insert(&mut self, name: &str, signature: TypeSignature, constructor: Constructor) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::InvalidInput("record type name must not be empty".to_string()));
        }
        if self.entries.contains_key(name) {
            return Err(Error::DuplicateRecordType(name.to_string()));
        }
        debug!(target: "recordkit::registry", record_type = name, signature = %signature, "Registered record type");
        self.entries.insert(
            name.to_string(),
            Entry {
                signature,
                constructor,
            },
        );
        Ok(())
    }

    /// Construct an instance of the record type registered under `name`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownRecordType`] if nothing is registered under `name`
    /// - [`Error::TypeMismatch`] carrying the unmodified validation error
    pub fn construct(&self, name: &str, arguments: Vec<Value>) -> Result<Box<dyn Record>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| Error::UnknownRecordType(name.to_string()))?;

        debug!(target: "recordkit::registry", record_type = name, arity = arguments.len(), "Constructing record");
        (entry.constructor)(arguments).map_err(|e| {
            debug!(target: "recordkit::registry", record_type = name, error = %e, "Construction rejected");
            Error::TypeMismatch(e)
        })
    }

    /// Signature registered under `name`
    pub fn signature(&self, name: &str) -> Option<&TypeSignature> {
        self.entries.get(name).map(|e| &e.signature)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered record types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Instance of a record type defined at runtime
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRecord {
    type_name: Arc<str>,
    labels: Arc<[String]>,
    values: Vec<Value>,
}

impl DynamicRecord {
    /// Field values in signature order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value of the field labeled `label`
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|l| l == label)
            .and_then(|i| self.values.get(i))
    }
}

impl Record for DynamicRecord {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn fields(&self) -> Vec<Field<'_>> {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(label, value)| Field::primitive(label, value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments;
    use crate::describe::describe;
    use crate::value::ValueKind;

    fn point_slots() -> Vec<SignatureSlot> {
        vec![
            SignatureSlot::labeled("x", ValueKind::FloatingPoint),
            SignatureSlot::labeled("y", ValueKind::FloatingPoint),
        ]
    }

    #[test]
    fn test_define_and_construct_dynamic() {
        let mut registry = RecordRegistry::new();
        let sig = registry.define_signature("Point", point_slots()).unwrap();
        assert_eq!(sig.render(), "(x: Double, y: Double)");

        let record = registry.construct("Point", arguments![1.5, -2.0]).unwrap();
        assert_eq!(record.type_name(), "Point");
        let out = describe(record.as_ref());
        assert!(out.starts_with("Instance of Point:\n  x: 1.5\n  y: -2.0\n"));
    }

    #[test]
    fn test_unlabeled_dynamic_uses_positions() {
        let mut registry = RecordRegistry::new();
        registry
            .define_signature(
                "Pair",
                vec![
                    SignatureSlot::unlabeled(ValueKind::Text),
                    SignatureSlot::unlabeled(ValueKind::Boolean),
                ],
            )
            .unwrap();
        let record = registry.construct("Pair", arguments!["a", true]).unwrap();
        let labels: Vec<&str> = record.fields().iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["0", "1"]);
    }

    #[test]
    fn test_construct_mismatch_is_unmodified() {
        let mut registry = RecordRegistry::new();
        registry.define_signature("Point", point_slots()).unwrap();
        match registry.construct("Point", arguments![1, 2]) {
            Err(Error::TypeMismatch(e)) => {
                assert_eq!(e.expected(), "(x: Double, y: Double)");
                assert_eq!(e.actual(), "(Int, Int)");
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_record_type() {
        let registry = RecordRegistry::new();
        assert!(matches!(
            registry.construct("Boat", Vec::new()),
            Err(Error::UnknownRecordType(name)) if name == "Boat"
        ));
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let mut registry = RecordRegistry::new();
        registry.define_signature("Point", point_slots()).unwrap();
        assert!(matches!(
            registry.define_signature("Point", point_slots()),
            Err(Error::DuplicateRecordType(_))
        ));
        assert!(matches!(
            registry.define_signature("  ", point_slots()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mixed_labels_rejected_and_not_registered() {
        let mut registry = RecordRegistry::new();
        let slots = vec![
            SignatureSlot::labeled("x", ValueKind::Integer),
            SignatureSlot::unlabeled(ValueKind::Integer),
        ];
        assert!(matches!(
            registry.define_signature("Bad", slots),
            Err(Error::MixedLabels)
        ));
        assert!(!registry.contains("Bad"));
    }

    #[test]
    fn test_names_sorted_and_signature_lookup() {
        let mut registry = RecordRegistry::new();
        registry.define_signature("Zed", point_slots()).unwrap();
        registry.define_signature("Alpha", point_slots()).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Alpha", "Zed"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.signature("Zed").is_some());
        assert!(registry.signature("Nope").is_none());
    }

    #[test]
    fn test_dynamic_record_get() {
        let mut registry = RecordRegistry::new();
        registry.define_signature("Point", point_slots()).unwrap();
        let sig = registry.signature("Point").unwrap().clone();
        let values = sig.validate(arguments![3.0, 4.0]).unwrap().into_values();
        let record = DynamicRecord {
            type_name: Arc::from("Point"),
            labels: Arc::from(vec!["x".to_string(), "y".to_string()]),
            values,
        };
        assert_eq!(record.get("y"), Some(&Value::FloatingPoint(4.0)));
        assert_eq!(record.get("z"), None);
    }

    /// Declares `(name: String, year: Int)` but builds from `(String, f64)`.
    #[derive(Debug)]
    struct Misdeclared {
        name: String,
        year: f64,
    }

    static MISDECLARED: once_cell::sync::Lazy<TypeSignature> = once_cell::sync::Lazy::new(|| {
        TypeSignature::labeled([("name", ValueKind::Text), ("year", ValueKind::Integer)])
    });

    impl ArgumentConstructible for Misdeclared {
        type Arguments = (String, f64);

        fn signature() -> &'static TypeSignature {
            &MISDECLARED
        }

        fn build((name, year): Self::Arguments) -> Self {
            Misdeclared { name, year }
        }
    }

    impl Record for Misdeclared {
        fn type_name(&self) -> &str {
            "Misdeclared"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::primitive("name", self.name.as_str()),
                Field::primitive("year", self.year),
            ]
        }
    }

    #[test]
    fn test_register_rejects_build_tuple_mismatch() {
        let mut registry = RecordRegistry::new();
        let err = registry.register::<Misdeclared>("Misdeclared").unwrap_err();
        match err {
            Error::BuildTupleMismatch {
                record_type,
                signature,
                build,
            } => {
                assert_eq!(record_type, "Misdeclared");
                assert_eq!(signature, "(name: String, year: Int)");
                assert_eq!(build, "(String, Double)");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!registry.contains("Misdeclared"));
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecordRegistry>();
    }
}
