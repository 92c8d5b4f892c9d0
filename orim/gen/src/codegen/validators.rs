//! Validators, creation-time validation calls and pattern declarations.
//!
//! A validator is the conjunction of the field's constraints, checked in a
//! fixed order: minimum length, maximum length, enum membership, pattern.
//!
//! - Non-nullable: `defined && c1 && c2 ...`
//! - Nullable: `c1 && c2 ... || undefined`
//!
//! With no constraints these degenerate to `defined` and `undefined`.
//!
//! Pattern sources end up in a JavaScript `new RegExp(..)` call, so they are
//! checked against the ECMAScript grammar with `regress` rather than any
//! other regex dialect.

use orim_define::js::{is_identifier, string_literal};
use orim_define::{FieldDescriptor, PatternConstraint};
use regress::Regex;

use super::{FieldSynthesizer, Fragment};
use crate::errors::GeneratorError;

const AND: &str = " &&\n      ";
const OR: &str = " ||\n      ";

/// Name of the pattern-matcher binding declared for a field.
///
/// The raw name is used when it is a valid identifier, otherwise the
/// mixed-case identifier.
pub fn pattern_binding(field: &FieldDescriptor) -> String {
    if is_identifier(&field.name) {
        format!("{}Test", field.name)
    } else {
        format!("{}Test", field.mixed_name())
    }
}

/// Compiles a pattern as an ECMAScript regular expression (no flags, the
/// way `new RegExp(source)` does), attributing failures to the field and
/// model.
pub fn compile_pattern(
    model_name: &str,
    field: &FieldDescriptor,
    pattern: &PatternConstraint,
) -> Result<Regex, GeneratorError> {
    Regex::new(&pattern.source).map_err(|source| GeneratorError::InvalidPattern {
        model: model_name.to_string(),
        field: field.name.clone(),
        source,
    })
}

impl FieldSynthesizer<'_> {
    /// Boolean predicate `is<Field>Valid ()`.
    pub fn validator(&self, field: &FieldDescriptor) -> Fragment {
        let getter = self.accessor_call(field);

        let mut conditions = Vec::new();
        if let Some(length) = field.length {
            if let Some(min) = length.min {
                conditions.push(format!("{getter}.length >= {min}"));
            }
            if let Some(max) = length.max {
                conditions.push(format!("{getter}.length <= {max}"));
            }
        }
        if let Some(enumeration) = &field.enumeration {
            conditions.push(format!("{}.includes({getter})", enumeration.array_literal()));
        }
        if field.pattern.is_some() {
            conditions.push(format!("{}.test({getter})", pattern_binding(field)));
        }

        let defined = format!("{getter} !== undefined");
        let undefined = format!("{getter} === undefined");

        let expr = match (field.nullable, conditions.is_empty()) {
            (false, true) => defined,
            (false, false) => format!("{defined}{AND}{}", conditions.join(AND)),
            (true, true) => undefined,
            (true, false) => format!("{}{OR}{undefined}", conditions.join(AND)),
        };

        Fragment::new(
            field,
            format!("is{}Valid () {{ return {expr} }}", field.accessor_stem()),
        )
    }

    /// Guard clause used when validating a new object: returns the field's
    /// invalid-value message as soon as its validator fails.
    pub fn new_validation(&self, field: &FieldDescriptor) -> Fragment {
        let stem = field.accessor_stem();
        Fragment::new(
            field,
            format!(
                "if (!this.is{stem}Valid()) {{ return {}.msgs.invalid{stem}Message }}",
                self.model_name()
            ),
        )
    }

    /// Declaration of the pattern matcher used by the validator.
    ///
    /// Returns `Ok(None)` for fields without a pattern.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidPattern` if the pattern source is not
    /// a valid ECMAScript regular expression.
    pub fn pattern_declaration(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<Fragment>, GeneratorError> {
        let Some(pattern) = &field.pattern else {
            return Ok(None);
        };
        compile_pattern(self.model_name(), field, pattern)?;

        Ok(Some(Fragment::new(
            field,
            format!(
                "const {} = new RegExp({})",
                pattern_binding(field),
                string_literal(&pattern.source)
            ),
        )))
    }
}
