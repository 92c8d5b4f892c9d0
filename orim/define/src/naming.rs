//! Identifier derivation for generated symbols.
//!
//! A raw field name (as it appears in transmitted payloads) is turned into
//! two identifiers: a mixed-case one (`created_at` -> `createdAt`) used for
//! key constants and accessors, and an upper-case one (`created_at` ->
//! `CREATED_AT`) used to recognize the identity field.

use convert_case::{Case, Casing};

/// Upper-case identifier that marks the identity field of a model.
pub const IDENTITY_UPPER_NAME: &str = "ID";

/// Derives the mixed-case identifier for a raw field name.
///
/// ## Examples
///
/// ```
/// use orim_define::naming::mixed_case;
///
/// assert_eq!(mixed_case("created_at"), "createdAt");
/// assert_eq!(mixed_case("email"), "email");
/// ```
pub fn mixed_case(raw: &str) -> String {
    raw.to_case(Case::Camel)
}

/// Derives the upper-case identifier for a raw field name.
///
/// ## Examples
///
/// ```
/// use orim_define::naming::upper_case;
///
/// assert_eq!(upper_case("createdAt"), "CREATED_AT");
/// assert_eq!(upper_case("id"), "ID");
/// ```
pub fn upper_case(raw: &str) -> String {
    raw.to_case(Case::Constant)
}

/// Upper-cases the first character, leaving the rest untouched.
///
/// Accessor and validator names embed the mixed-case identifier after a
/// verb (`get`, `is`), so `createdAt` becomes `CreatedAt` there.
pub fn capitalize_first(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
