//! Validate-then-construct contract for record types
//!
//! Every record type implements [`ArgumentConstructible`]: it declares its
//! signature once, and provides a pure `build` step from the unpacked
//! values. `construct` is the single entry point for validated construction.
//!
//! ## Composite records
//!
//! A composite record inlines the slots of each embedded record into its
//! own flattened signature. Its `construct` overrides the default:
//!
//! 1. check its own arity
//! 2. [`delegate`] each embedded sub-range to the embedded record's own
//!    `construct`, surfacing any error unchanged
//! 3. validate its full signature and build
//!
//! Because delegation happens before the outer per-position comparison, a
//! bad value inside an embedded range reports the embedded signature.

use crate::error::TypeMismatchError;
use crate::signature::TypeSignature;
use crate::value::{Unpack, Value};
use std::ops::Range;

/// A record type that can be constructed from a runtime argument list
pub trait ArgumentConstructible: Sized {
    /// Concrete tuple the validated values unpack into
    type Arguments: Unpack;

    /// The record type's signature, fixed for the lifetime of the process
    fn signature() -> &'static TypeSignature;

    /// Build an instance from validated values.
    ///
    /// May normalize fields deterministically; never fails.
    fn build(arguments: Self::Arguments) -> Self;

    /// Validate `arguments` against [`signature`](Self::signature) and build.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeMismatchError`] if the arguments do not match the
    /// signature. No instance is built in that case.
    fn construct(arguments: Vec<Value>) -> Result<Self, TypeMismatchError> {
        let tuple = Self::signature().validate(arguments)?;
        Ok(Self::build(tuple.unpack()?))
    }
}

/// Construct an embedded record from a sub-range of an argument list.
///
/// The sub-range is copied into a fresh argument list. Errors from the
/// embedded record are returned unchanged, so they name the embedded
/// signature rather than the caller's. A range outside `arguments` yields
/// an empty list, which the embedded record rejects as an arity mismatch.
pub fn delegate<T: ArgumentConstructible>(
    arguments: &[Value],
    slots: Range<usize>,
) -> Result<T, TypeMismatchError> {
    let sub = arguments.get(slots).map(<[Value]>::to_vec).unwrap_or_default();
    T::construct(sub)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments;
    use crate::value::ValueKind;
    use once_cell::sync::Lazy;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: f64,
        y: f64,
    }

    static POINT: Lazy<TypeSignature> = Lazy::new(|| {
        TypeSignature::labeled([("x", ValueKind::FloatingPoint), ("y", ValueKind::FloatingPoint)])
    });

    impl ArgumentConstructible for Point {
        type Arguments = (f64, f64);

        fn signature() -> &'static TypeSignature {
            &POINT
        }

        fn build((x, y): Self::Arguments) -> Self {
            Point { x, y }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Segment {
        name: String,
        from: Point,
    }

    static SEGMENT: Lazy<TypeSignature> = Lazy::new(|| {
        TypeSignature::labeled([
            ("name", ValueKind::Text),
            ("fromX", ValueKind::FloatingPoint),
            ("fromY", ValueKind::FloatingPoint),
        ])
    });

    impl ArgumentConstructible for Segment {
        type Arguments = (String, f64, f64);

        fn signature() -> &'static TypeSignature {
            &SEGMENT
        }

        fn build((name, x, y): Self::Arguments) -> Self {
            Segment {
                name,
                from: Point::build((x, y)),
            }
        }

        fn construct(arguments: Vec<Value>) -> Result<Self, TypeMismatchError> {
            Self::signature().check_arity(&arguments)?;
            let from = delegate::<Point>(&arguments, 1..3)?;
            let (name, _, _) = Self::signature().validate(arguments)?.unpack::<Self::Arguments>()?;
            Ok(Segment { name, from })
        }
    }

    #[test]
    fn test_default_construct() {
        let p = Point::construct(arguments![1.0, 2.5]).unwrap();
        assert_eq!(p, Point { x: 1.0, y: 2.5 });
    }

    #[test]
    fn test_default_construct_mismatch() {
        let err = Point::construct(arguments![1, 2]).unwrap_err();
        assert_eq!(err.expected(), "(x: Double, y: Double)");
        assert_eq!(err.actual(), "(Int, Int)");
    }

    #[test]
    fn test_delegate_sub_range() {
        let p: Point = delegate(&arguments!["a", 3.0, 4.0], 1..3).unwrap();
        assert_eq!(p, Point { x: 3.0, y: 4.0 });
    }

    #[test]
    fn test_delegate_out_of_range_is_arity_mismatch() {
        let err = delegate::<Point>(&arguments![1.0], 1..3).unwrap_err();
        assert_eq!(err.actual(), "()");
    }

    #[test]
    fn test_composite_success() {
        let s = Segment::construct(arguments!["ab", 0.5, 1.5]).unwrap();
        assert_eq!(s.name, "ab");
        assert_eq!(s.from, Point { x: 0.5, y: 1.5 });
    }

    #[test]
    fn test_composite_embedded_fault_reports_embedded_signature() {
        let err = Segment::construct(arguments!["ab", 0.5, 1]).unwrap_err();
        assert_eq!(err.expected(), "(x: Double, y: Double)");
        assert_eq!(err.actual(), "(Double, Int)");
    }

    #[test]
    fn test_composite_outer_fault_reports_outer_signature() {
        let err = Segment::construct(arguments![7, 0.5, 1.5]).unwrap_err();
        assert_eq!(err.expected(), "(name: String, fromX: Double, fromY: Double)");
        assert_eq!(err.actual(), "(Int, Double, Double)");
    }

    #[test]
    fn test_composite_arity_fault_reports_outer_signature() {
        let err = Segment::construct(arguments!["ab", 0.5]).unwrap_err();
        assert_eq!(err.expected(), "(name: String, fromX: Double, fromY: Double)");
        assert_eq!(err.actual(), "(String, Double)");
    }
}
