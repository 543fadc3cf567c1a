//! Value types for recordkit
//!
//! This module defines:
//! - Value: Tagged runtime value supplied in an argument list
//! - ValueKind: The fieldless tag of a Value
//! - FromValue / Unpack: Typed extraction of validated values
//!
//! ## Value Model (Frozen)
//!
//! The Value enum has exactly 4 variants:
//! - Text, Integer, FloatingPoint, Boolean
//!
//! ### Type Rules
//!
//! - A value carries exactly one kind
//! - No implicit conversions between kinds: an Integer is never accepted
//!   where a FloatingPoint is expected
//! - `Integer(1) != FloatingPoint(1.0)` - different kinds are NEVER equal
//! - FloatingPoint uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use serde::Serialize;
use std::fmt;

/// Runtime-typed value carried in an argument list
///
/// ## Kind Equality
///
/// Different kinds are NEVER equal, even if they contain the same "value":
/// - `Integer(1) != FloatingPoint(1.0)`
/// - `Text("true") != Boolean(true)`
#[derive(Debug, Clone, Serialize)]
pub enum Value {
    /// UTF-8 text
    Text(String),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point (IEEE-754)
    FloatingPoint(f64),
    /// Boolean value
    Boolean(bool),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::FloatingPoint(a), Value::FloatingPoint(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

/// The tag of a [`Value`]
///
/// Kinds are compared by tag equality only. The display names are the
/// canonical spelling used in signatures and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    /// Rendered as `String`
    #[serde(rename = "String")]
    Text,
    /// Rendered as `Int`
    #[serde(rename = "Int")]
    Integer,
    /// Rendered as `Double`
    #[serde(rename = "Double")]
    FloatingPoint,
    /// Rendered as `Bool`
    #[serde(rename = "Bool")]
    Boolean,
}

impl ValueKind {
    /// All kinds (for iteration)
    pub const ALL: [ValueKind; 4] = [
        ValueKind::Text,
        ValueKind::Integer,
        ValueKind::FloatingPoint,
        ValueKind::Boolean,
    ];

    /// Canonical display name
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Text => "String",
            ValueKind::Integer => "Int",
            ValueKind::FloatingPoint => "Double",
            ValueKind::Boolean => "Bool",
        }
    }

    /// Parse from the canonical display name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(ValueKind::Text),
            "Int" => Some(ValueKind::Integer),
            "Double" => Some(ValueKind::FloatingPoint),
            "Bool" => Some(ValueKind::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// The kind tag of this value
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Integer(_) => ValueKind::Integer,
            Value::FloatingPoint(_) => ValueKind::FloatingPoint,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Get the kind name as a string
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Get as &str if this is a Text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i64 if this is an Integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a FloatingPoint value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::FloatingPoint(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as bool if this is a Boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Debug-dump rendering: text is printed verbatim and floats always keep
/// a fractional part (`49900.0`, `12.99`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::FloatingPoint(x) => write!(f, "{:?}", x),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

// ============================================================================
// From implementations for ergonomic argument lists
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::FloatingPoint(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::FloatingPoint(f as f64)
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Text(s) => serde_json::Value::String(s),
            Value::Integer(i) => serde_json::Value::Number(i.into()),
            Value::FloatingPoint(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Boolean(b) => serde_json::Value::Bool(b),
        }
    }
}

/// Build an argument list (`Vec<Value>`) from heterogeneous literals.
///
/// ```
/// use recordkit_core::{arguments, Value};
///
/// let args = arguments!["John Doe", 1980];
/// assert_eq!(args, vec![Value::Text("John Doe".into()), Value::Integer(1980)]);
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

// ============================================================================
// Typed extraction
// ============================================================================

/// A concrete Rust type that one [`ValueKind`] unpacks into.
pub trait FromValue: Sized {
    /// The kind this type is extracted from
    const KIND: ValueKind;

    /// Take the payload if `value` has kind [`Self::KIND`]
    fn from_value(value: Value) -> Option<Self>;
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn from_value(value: Value) -> Option<Self> {
        value.as_int()
    }
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::FloatingPoint;

    fn from_value(value: Value) -> Option<Self> {
        value.as_float()
    }
}

impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn from_value(value: Value) -> Option<Self> {
        value.as_bool()
    }
}

/// A Rust tuple that an ordered list of values unpacks into.
///
/// Implemented for tuples of [`FromValue`] types with arity 1 through 8.
pub trait Unpack: Sized {
    /// Kinds of the tuple elements, in order
    fn kinds() -> Vec<ValueKind>;

    /// Unpack `values` positionally; `None` on arity or kind disagreement
    fn unpack(values: Vec<Value>) -> Option<Self>;
}

macro_rules! impl_unpack {
    ($arity:expr; $($name:ident),+) => {
        impl<$($name: FromValue),+> Unpack for ($($name,)+) {
            fn kinds() -> Vec<ValueKind> {
                vec![$($name::KIND),+]
            }

            fn unpack(values: Vec<Value>) -> Option<Self> {
                if values.len() != $arity {
                    return None;
                }
                let mut iter = values.into_iter();
                Some(($($name::from_value(iter.next()?)?,)+))
            }
        }
    };
}

impl_unpack!(1; A);
impl_unpack!(2; A, B);
impl_unpack!(3; A, B, C);
impl_unpack!(4; A, B, C, D);
impl_unpack!(5; A, B, C, D, E);
impl_unpack!(6; A, B, C, D, E, F);
impl_unpack!(7; A, B, C, D, E, F, G);
impl_unpack!(8; A, B, C, D, E, F, G, H);
