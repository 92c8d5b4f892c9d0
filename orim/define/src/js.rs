//! JavaScript literal helpers.
//!
//! Generated fragments embed raw names, enum values and pattern sources as
//! literals. Everything that ends up inside quotes goes through
//! [`string_literal`].

use serde_json::Value;

/// Renders `s` as a single-quoted JavaScript string literal.
///
/// ## Examples
///
/// ```
/// use orim_define::js::string_literal;
///
/// assert_eq!(string_literal("email"), "'email'");
/// assert_eq!(string_literal("it's"), r"'it\'s'");
/// ```
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

/// Renders a JSON value as a JavaScript literal.
///
/// Strings are single-quoted; numbers, booleans, null, arrays and objects
/// use their JSON text, which is valid JavaScript.
pub fn value_literal(value: &Value) -> String {
    match value {
        Value::String(s) => string_literal(s),
        other => other.to_string(),
    }
}

/// Returns `true` when `name` can be used after a `.` member access.
///
/// Reserved words are accepted since they are legal property names.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
