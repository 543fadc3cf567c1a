//! Reflective instance display
//!
//! Records expose their labeled fields in order through [`Record`]; the
//! dump walks those fields and recurses into nested records. Records are
//! acyclic compositions of validated values, so no cycle guard is needed.
//!
//! ## Format
//!
//! ```text
//! Instance of Book:
//!   title: The Great Gatsby
//!   author: 
//!     Instance of Author:
//!       name: F. Scott Fitzgerald
//!       birthYear: 1896
//! -----------------------------------------------------------------
//!   pageCount: 180
//!   price: 12.99
//! -----------------------------------------------------------------
//! ```

use crate::value::Value;
use std::fmt::{self, Debug, Write};

/// Default separator printed after every record block
pub const DEFAULT_SEPARATOR: &str =
    "-----------------------------------------------------------------";

/// Default extra indentation for each nesting level
pub const DEFAULT_NEST_INDENT: usize = 4;

/// Explicit "list my labeled fields in order" capability
pub trait Record: Debug + Send + Sync {
    /// Name printed in the `Instance of ...:` header
    fn type_name(&self) -> &str;

    /// Labeled fields in declaration order
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One labeled field of a record
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Field label
    pub label: &'a str,
    /// Field value
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Field holding a primitive value
    pub fn primitive(label: &'a str, value: impl Into<Value>) -> Self {
        Self {
            label,
            value: FieldValue::Primitive(value.into()),
        }
    }

    /// Field holding a nested record
    pub fn record(label: &'a str, record: &'a dyn Record) -> Self {
        Self {
            label,
            value: FieldValue::Record(record),
        }
    }
}

/// Value of a field: either a primitive or a nested record
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    /// Printed inline
    Primitive(Value),
    /// Printed as an indented block
    Record(&'a dyn Record),
}

/// Layout options for [`write_instance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOptions {
    /// Line printed (unindented) after each record block
    pub separator: String,
    /// Extra spaces added per nesting level
    pub nest_indent: usize,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            nest_indent: DEFAULT_NEST_INDENT,
        }
    }
}

/// Write the indented dump of `record` to a caller-supplied sink.
pub fn write_instance<W: Write + ?Sized>(
    sink: &mut W,
    record: &dyn Record,
    options: &DescribeOptions,
) -> fmt::Result {
    write_block(sink, record, options, "")
}

fn write_block<W: Write + ?Sized>(
    sink: &mut W,
    record: &dyn Record,
    options: &DescribeOptions,
    indent: &str,
) -> fmt::Result {
    writeln!(sink, "{}Instance of {}:", indent, record.type_name())?;
    for field in record.fields() {
        write!(sink, "{}  {}: ", indent, field.label)?;
        match field.value {
            FieldValue::Primitive(value) => writeln!(sink, "{}", value)?,
            FieldValue::Record(nested) => {
                writeln!(sink)?;
                let deeper = format!("{}{}", indent, " ".repeat(options.nest_indent));
                write_block(sink, nested, options, &deeper)?;
            }
        }
    }
    writeln!(sink, "{}", options.separator)
}

/// Dump `record` with the default layout.
pub fn describe(record: &dyn Record) -> String {
    describe_with(record, &DescribeOptions::default())
}

/// Dump `record` with custom layout options.
pub fn describe_with(record: &dyn Record, options: &DescribeOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_instance(&mut out, record, options);
    out
}

/// Render `record` as a JSON object; nested records become nested objects.
pub fn to_json(record: &dyn Record) -> serde_json::Value {
    let object = record
        .fields()
        .into_iter()
        .map(|field| {
            let value = match field.value {
                FieldValue::Primitive(value) => serde_json::Value::from(value),
                FieldValue::Record(nested) => to_json(nested),
            };
            (field.label.to_string(), value)
        })
        .collect();
    serde_json::Value::Object(object)
}
