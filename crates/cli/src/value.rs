//! String → Value parsing rules.
//!
//! Command-line arguments are parsed into `Value` using auto-detect logic:
//! 1. A JSON string literal (`"..."`) → Value::Text (forces text for `"1980"`)
//! 2. `true` / `false` → Value::Boolean
//! 3. Integer pattern → Value::Integer
//! 4. Float pattern → Value::FloatingPoint
//! 5. Everything else → Value::Text

use recordkit_core::Value;

/// Auto-detect value kind from a user-supplied string.
///
/// Rules applied in order:
/// 1. Starts with `"` and parses as a JSON string → `Value::Text` of its contents
/// 2. `true` / `false` → `Value::Boolean`
/// 3. Matches `^-?[0-9]+$` and fits i64 → `Value::Integer`
/// 4. Matches float pattern → `Value::FloatingPoint`
/// 5. Everything else → `Value::Text`
pub fn parse_value(s: &str) -> Value {
    // Rule 1: quoted text
    if s.starts_with('"') {
        if let Ok(text) = serde_json::from_str::<String>(s) {
            return Value::Text(text);
        }
        // If JSON parse fails, fall through to plain text
    }

    // Rule 2: booleans
    if s == "true" {
        return Value::Boolean(true);
    }
    if s == "false" {
        return Value::Boolean(false);
    }

    // Rule 3: integers
    if is_integer(s) {
        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
    }

    // Rule 4: floats
    if is_float(s) {
        if let Ok(f) = s.parse::<f64>() {
            return Value::FloatingPoint(f);
        }
    }

    // Rule 5: everything else is text
    Value::Text(s.to_string())
}

/// Parse a whole argument list.
pub fn parse_values<S: AsRef<str>>(raw: &[S]) -> Vec<Value> {
    raw.iter().map(|s| parse_value(s.as_ref())).collect()
}

fn is_integer(s: &str) -> bool {
    let s = if let Some(rest) = s.strip_prefix('-') {
        rest
    } else {
        s
    };
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_float(s: &str) -> bool {
    let s = if let Some(rest) = s.strip_prefix('-') {
        rest
    } else {
        s
    };
    if s.is_empty() {
        return false;
    }
    // Must contain a dot or exponent
    if !s.contains('.') && !s.contains('e') && !s.contains('E') {
        return false;
    }
    // Must start with a digit or a dot followed by a digit
    if !s.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return false;
    }
    s.bytes().all(|b| {
        b.is_ascii_digit() || b == b'.' || b == b'e' || b == b'E' || b == b'+' || b == b'-'
    })
}
