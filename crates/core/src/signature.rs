//! Type signatures
//!
//! A [`TypeSignature`] is the ordered, immutable list of slots a record type
//! expects. It is declared once per record type and never changes afterwards.
//!
//! ## Labeling
//!
//! A signature is either fully labeled or fully unlabeled:
//! - `TypeSignature::labeled` and `TypeSignature::unlabeled` cannot mix forms
//! - `TypeSignature::define` accepts arbitrary slots and rejects a mix
//!
//! Labels are rendering metadata only; they never take part in matching.

use crate::error::{Error, Result};
use crate::render::render_slots;
use crate::value::ValueKind;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// One expected position of a signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SignatureSlot {
    label: Option<String>,
    kind: ValueKind,
}

impl SignatureSlot {
    /// Slot with a label
    pub fn labeled(label: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            label: Some(label.into()),
            kind,
        }
    }

    /// Slot without a label
    pub fn unlabeled(kind: ValueKind) -> Self {
        Self { label: None, kind }
    }

    /// The slot label, if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The expected kind
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

/// Ordered, immutable list of expected slots for one record type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeSignature {
    slots: Vec<SignatureSlot>,
}

impl TypeSignature {
    /// Fully labeled signature
    ///
    /// ```
    /// use recordkit_core::{TypeSignature, ValueKind};
    ///
    /// let sig = TypeSignature::labeled([("name", ValueKind::Text), ("birthYear", ValueKind::Integer)]);
    /// assert_eq!(sig.render(), "(name: String, birthYear: Int)");
    /// ```
    pub fn labeled<L: Into<String>>(slots: impl IntoIterator<Item = (L, ValueKind)>) -> Self {
        Self {
            slots: slots
                .into_iter()
                .map(|(label, kind)| SignatureSlot::labeled(label, kind))
                .collect(),
        }
    }

    /// Fully unlabeled signature
    pub fn unlabeled(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        Self {
            slots: kinds.into_iter().map(SignatureSlot::unlabeled).collect(),
        }
    }

    /// Define a signature from arbitrary slots.
    ///
    /// # Errors
    ///
    /// - [`Error::MixedLabels`] if some slots are labeled and others are not
    /// - [`Error::DuplicateLabel`] if a label appears twice
    pub fn define(slots: Vec<SignatureSlot>) -> Result<Self> {
        let labeled = slots.iter().filter(|s| s.label.is_some()).count();
        if labeled != 0 && labeled != slots.len() {
            return Err(Error::MixedLabels);
        }

        {
            let mut seen = HashSet::new();
            for label in slots.iter().filter_map(SignatureSlot::label) {
                if !seen.insert(label) {
                    return Err(Error::DuplicateLabel(label.to_string()));
                }
            }
        }

        Ok(Self { slots })
    }

    /// Number of slots
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// The slots in order
    pub fn slots(&self) -> &[SignatureSlot] {
        &self.slots
    }

    /// Expected kinds in order
    pub fn kinds(&self) -> Vec<ValueKind> {
        self.slots.iter().map(SignatureSlot::kind).collect()
    }

    /// Whether every slot carries a label (false for the empty signature)
    pub fn is_labeled(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|s| s.label.is_some())
    }

    /// Canonical rendering used as the `expected` half of mismatch errors
    pub fn render(&self) -> String {
        render_slots(&self.slots)
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
