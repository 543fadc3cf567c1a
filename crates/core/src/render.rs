//! Canonical textual forms used in error messages
//!
//! Both halves of a [`TypeMismatchError`](crate::TypeMismatchError) are
//! produced here:
//! - a signature renders as `(label: Kind, ...)` when labeled, `(Kind, ...)` otherwise
//! - an argument list renders as its unlabeled kind sequence `(Kind, ...)`

use crate::signature::SignatureSlot;
use crate::value::{Value, ValueKind};

/// Render signature slots.
///
/// Labels are printed only when every slot carries one; signatures built
/// through [`TypeSignature`](crate::TypeSignature) are never mixed.
pub fn render_slots(slots: &[SignatureSlot]) -> String {
    let labeled = !slots.is_empty() && slots.iter().all(|s| s.label().is_some());
    let parts: Vec<String> = slots
        .iter()
        .map(|slot| match slot.label() {
            Some(label) if labeled => format!("{}: {}", label, slot.kind()),
            _ => slot.kind().name().to_string(),
        })
        .collect();
    format!("({})", parts.join(", "))
}

/// Render the kind sequence of an argument list.
pub fn render_arguments(arguments: &[Value]) -> String {
    render_kinds(arguments.iter().map(Value::kind))
}

/// Render a bare kind sequence.
pub fn render_kinds(kinds: impl IntoIterator<Item = ValueKind>) -> String {
    let parts: Vec<&'static str> = kinds.into_iter().map(|k| k.name()).collect();
    format!("({})", parts.join(", "))
}
