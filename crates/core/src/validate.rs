//! Structural validation of argument lists against signatures
//!
//! ## Algorithm
//!
//! 1. Compare the argument count with the signature arity
//! 2. Compare the kind of every argument with the kind of its slot
//! 3. If everything agrees, hand the values back as a [`ValidatedTuple`]
//!
//! Any disagreement fails with a [`TypeMismatchError`] whose `actual` side
//! is the kind sequence of the *whole* argument list. There is no
//! first-failure or per-slot reporting, and no coercion between kinds.

use crate::error::TypeMismatchError;
use crate::render::render_arguments;
use crate::signature::TypeSignature;
use crate::value::{Unpack, Value};

/// Ordered values that fully matched a signature.
///
/// Only [`TypeSignature::validate`] creates one, so a `ValidatedTuple` is
/// never partially populated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTuple<'s> {
    signature: &'s TypeSignature,
    values: Vec<Value>,
}

impl<'s> ValidatedTuple<'s> {
    /// The signature these values were validated against
    pub fn signature(&self) -> &'s TypeSignature {
        self.signature
    }

    /// Number of values (always the signature arity)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True only for the empty signature
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in signature order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Take the values in signature order
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Unpack into a concrete Rust tuple.
    ///
    /// This only fails when `T` disagrees with the signature the tuple was
    /// validated against, i.e. when a record's build tuple does not match
    /// its own declaration. That is reported as the same mismatch error a
    /// caller would see for bad input.
    pub fn unpack<T: Unpack>(self) -> Result<T, TypeMismatchError> {
        let signature = self.signature;
        let actual = render_arguments(&self.values);
        T::unpack(self.values).ok_or_else(|| TypeMismatchError::new(signature.render(), actual))
    }
}

impl TypeSignature {
    /// Check the argument count alone.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeMismatchError`] showing the whole argument list when
    /// the count differs from [`arity`](TypeSignature::arity).
    pub fn check_arity(&self, arguments: &[Value]) -> Result<(), TypeMismatchError> {
        if arguments.len() != self.arity() {
            return Err(self.mismatch(arguments));
        }
        Ok(())
    }

    /// Validate an argument list against this signature.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeMismatchError`] if the arity differs or any position
    /// carries a different kind than its slot.
    ///
    /// ```
    /// use recordkit_core::{arguments, TypeSignature, ValueKind};
    ///
    /// let sig = TypeSignature::labeled([("name", ValueKind::Text), ("birthYear", ValueKind::Integer)]);
    /// let err = sig.validate(arguments![1, true]).unwrap_err();
    /// assert_eq!(err.expected(), "(name: String, birthYear: Int)");
    /// assert_eq!(err.actual(), "(Int, Bool)");
    /// ```
    pub fn validate(&self, arguments: Vec<Value>) -> Result<ValidatedTuple<'_>, TypeMismatchError> {
        self.check_arity(&arguments)?;

        let agrees = self
            .slots()
            .iter()
            .zip(&arguments)
            .all(|(slot, value)| slot.kind() == value.kind());
        if !agrees {
            return Err(self.mismatch(&arguments));
        }

        Ok(ValidatedTuple {
            signature: self,
            values: arguments,
        })
    }

    fn mismatch(&self, arguments: &[Value]) -> TypeMismatchError {
        TypeMismatchError::new(self.render(), render_arguments(arguments))
    }
}
