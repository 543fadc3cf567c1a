//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): the indented debug dump, `(error) ...` for failures
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use recordkit_core::{describe_with, to_json, DescribeOptions, Error, Record, TypeSignature};
use serde_json::json;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a constructed record.
pub fn format_record(record: &dyn Record, mode: OutputMode, options: &DescribeOptions) -> String {
    match mode {
        OutputMode::Human => describe_with(record, options),
        OutputMode::Json => pretty(&json!({
            "type": record.type_name(),
            "fields": to_json(record),
        })),
    }
}

/// Format a named signature.
pub fn format_signature(name: &str, signature: &TypeSignature, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("{} {}", name, signature.render()),
        OutputMode::Json => pretty(&json!({
            "type": name,
            "signature": signature.render(),
            "slots": signature.slots(),
        })),
    }
}

/// Format a list of named signatures.
pub fn format_signatures<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a TypeSignature)>,
    mode: OutputMode,
) -> String {
    let entries: Vec<_> = entries.into_iter().collect();
    match mode {
        OutputMode::Human => entries
            .iter()
            .map(|(name, sig)| format_signature(name, sig, mode))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Json => pretty(&serde_json::Value::Array(
            entries
                .iter()
                .map(|(name, sig)| json!({ "type": name, "signature": sig.render() }))
                .collect(),
        )),
    }
}

/// Format an error.
///
/// Type mismatches keep their canonical text; in JSON mode the rendered
/// `expected` and `actual` sides are included as separate fields.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", err),
        OutputMode::Json => {
            let body = match err {
                Error::TypeMismatch(e) => json!({
                    "error": e.describe(),
                    "expected": e.expected(),
                    "actual": e.actual(),
                }),
                other => json!({ "error": other.to_string() }),
            };
            pretty(&body)
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
