//! Field descriptors.
//!
//! A [`FieldDescriptor`] is the typed form of one schema property. Every
//! constraint is an optional record, so "does this field have a pattern?"
//! is a presence check on [`FieldDescriptor::pattern`] rather than a probe
//! of an untyped attribute bag.
//!
//! The serialized shape follows JSON-Schema property keywords:
//!
//! ```json
//! {
//!   "name": "email",
//!   "type": "string",
//!   "minLength": 3,
//!   "maxLength": 50,
//!   "pattern": "^[^@]+@[^@]+$",
//!   "nullable": false,
//!   "createOnly": true
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

use crate::js;
use crate::naming::{self, IDENTITY_UPPER_NAME};

/// Semantic type of a field.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use orim_define::FieldType;
///
/// assert_eq!(FieldType::from_str("object").unwrap(), FieldType::Object);
/// assert_eq!(FieldType::Identifier.to_string(), "identifier");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
    /// Text; combined with a date format it holds a date.
    String,
    /// Floating point number
    Number,
    /// Whole number
    Integer,
    /// true / false
    Boolean,
    /// Nested structure, stored as an immutable map
    Object,
    /// Sequence, stored as an immutable list
    Array,
    /// Opaque identifier value
    Identifier,
}

/// Refinement of a field's type.
///
/// Unknown formats are kept verbatim in [`FieldFormat::Other`] so a schema
/// never fails to load because of a format the generator doesn't act on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldFormat {
    Date,
    DateTime,
    Email,
    Uri,
    Other(String),
}

impl FieldFormat {
    pub fn as_str(&self) -> &str {
        match self {
            FieldFormat::Date => "date",
            FieldFormat::DateTime => "date-time",
            FieldFormat::Email => "email",
            FieldFormat::Uri => "uri",
            FieldFormat::Other(other) => other,
        }
    }

    /// Returns `true` only for `date`. A `date-time` value travels as a
    /// plain string and gets no date handling.
    pub fn is_date(&self) -> bool {
        matches!(self, FieldFormat::Date)
    }
}

impl From<String> for FieldFormat {
    fn from(value: String) -> Self {
        match value.as_str() {
            "date" => FieldFormat::Date,
            "date-time" => FieldFormat::DateTime,
            "email" => FieldFormat::Email,
            "uri" => FieldFormat::Uri,
            _ => FieldFormat::Other(value),
        }
    }
}

impl From<FieldFormat> for String {
    fn from(value: FieldFormat) -> Self {
        match value {
            FieldFormat::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length bounds for strings and sequences. Either bound may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthBounds {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl LengthBounds {
    /// Builds bounds, returning `None` when neither bound is given.
    pub fn new(min: Option<u64>, max: Option<u64>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            None
        } else {
            Some(Self { min, max })
        }
    }
}

/// Ordered set of allowed literal values.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumConstraint {
    pub values: Vec<Value>,
}

impl EnumConstraint {
    /// Renders the allowed values as a JavaScript array literal.
    ///
    /// ## Examples
    ///
    /// ```
    /// use orim_define::EnumConstraint;
    /// use serde_json::json;
    ///
    /// let constraint = EnumConstraint { values: vec![json!("a"), json!("b")] };
    /// assert_eq!(constraint.array_literal(), "['a', 'b']");
    /// ```
    pub fn array_literal(&self) -> String {
        let items: Vec<String> = self.values.iter().map(js::value_literal).collect();
        format!("[{}]", items.join(", "))
    }
}

/// Regular-expression source text a value must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternConstraint {
    pub source: String,
}

/// Description of one model field.
///
/// ## Examples
///
/// ```
/// use orim_define::{FieldDescriptor, FieldFormat, FieldType};
///
/// let field = FieldDescriptor::new("created_at", FieldType::String).with_format(FieldFormat::Date);
/// assert_eq!(field.mixed_name(), "createdAt");
/// assert_eq!(field.upper_name(), "CREATED_AT");
/// assert!(field.is_date());
/// assert!(field.needs_input_transform());
/// assert_eq!(field.default_value(), "new Date()");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawField", into = "RawField")]
pub struct FieldDescriptor {
    /// Raw identifier as it appears in transmitted payloads.
    pub name: String,
    pub field_type: FieldType,
    pub format: Option<FieldFormat>,
    pub length: Option<LengthBounds>,
    pub enumeration: Option<EnumConstraint>,
    pub pattern: Option<PatternConstraint>,
    /// Absence of a value is itself valid.
    pub nullable: bool,
    /// Stripped from update payloads.
    pub create_only: bool,
    /// Explicit default, overriding the per-type default.
    pub default: Option<Value>,
}

impl FieldDescriptor {
    /// Creates an unconstrained, non-nullable field.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            format: None,
            length: None,
            enumeration: None,
            pattern: None,
            nullable: false,
            create_only: false,
            default: None,
        }
    }

    /// Creates an identifier-typed field; named `id` it is the identity field.
    pub fn identity(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Identifier)
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn create_only(mut self) -> Self {
        self.create_only = true;
        self
    }

    pub fn with_format(mut self, format: FieldFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_length(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.length = LengthBounds::new(min, max);
        self
    }

    pub fn with_enum<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enumeration = Some(EnumConstraint {
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn with_pattern(mut self, source: impl Into<String>) -> Self {
        self.pattern = Some(PatternConstraint {
            source: source.into(),
        });
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mixed-case identifier derived from the raw name (`createdAt`).
    pub fn mixed_name(&self) -> String {
        naming::mixed_case(&self.name)
    }

    /// Upper-case identifier derived from the raw name (`CREATED_AT`).
    pub fn upper_name(&self) -> String {
        naming::upper_case(&self.name)
    }

    /// Mixed-case identifier with a capital first letter, as embedded in
    /// accessor and validator names (`getCreatedAt`, `isCreatedAtValid`).
    pub fn accessor_stem(&self) -> String {
        naming::capitalize_first(&self.mixed_name())
    }

    pub fn is_identity(&self) -> bool {
        self.upper_name() == IDENTITY_UPPER_NAME
    }

    /// A string field carrying a date format.
    pub fn is_date(&self) -> bool {
        self.field_type == FieldType::String && self.format.as_ref().is_some_and(FieldFormat::is_date)
    }

    pub fn has_constraints(&self) -> bool {
        self.length.is_some() || self.enumeration.is_some() || self.pattern.is_some()
    }

    /// Received payload values must be converted before they are stored.
    pub fn needs_input_transform(&self) -> bool {
        self.is_date()
    }

    /// The field gets a validator and a creation-time validation call.
    ///
    /// Nullable fields without constraints accept every value, so they are
    /// skipped. The identity field is assigned by the backend.
    pub fn needs_validation(&self) -> bool {
        !self.is_identity() && (!self.nullable || self.has_constraints())
    }

    /// Literal default-value expression for new instances.
    pub fn default_value(&self) -> String {
        if let Some(default) = &self.default {
            return match self.field_type {
                FieldType::String if self.is_date() => {
                    format!("new Date({})", js::value_literal(default))
                }
                FieldType::Object | FieldType::Array => format!("fromJS({})", default),
                _ => js::value_literal(default),
            };
        }
        if self.nullable {
            return "undefined".to_string();
        }
        match self.field_type {
            FieldType::String if self.is_date() => "new Date()",
            FieldType::String | FieldType::Identifier => "''",
            FieldType::Number | FieldType::Integer => "0",
            FieldType::Boolean => "false",
            FieldType::Object => "Map()",
            FieldType::Array => "List()",
        }
        .to_string()
    }
}

/// Flat wire shape of a field, mirroring JSON-Schema property keywords.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    field_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<FieldFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_length: Option<u64>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    enumeration: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    #[serde(default)]
    nullable: bool,
    #[serde(default)]
    create_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

impl From<RawField> for FieldDescriptor {
    fn from(raw: RawField) -> Self {
        // An untyped `id` is the identity field; anything else untyped is text.
        let field_type = raw.field_type.unwrap_or_else(|| {
            if naming::upper_case(&raw.name) == IDENTITY_UPPER_NAME {
                FieldType::Identifier
            } else {
                FieldType::String
            }
        });

        Self {
            name: raw.name,
            field_type,
            format: raw.format,
            length: LengthBounds::new(raw.min_length, raw.max_length),
            enumeration: raw.enumeration.map(|values| EnumConstraint { values }),
            pattern: raw.pattern.map(|source| PatternConstraint { source }),
            nullable: raw.nullable,
            create_only: raw.create_only,
            default: raw.default,
        }
    }
}

impl From<FieldDescriptor> for RawField {
    fn from(field: FieldDescriptor) -> Self {
        Self {
            name: field.name,
            field_type: Some(field.field_type),
            format: field.format,
            min_length: field.length.and_then(|l| l.min),
            max_length: field.length.and_then(|l| l.max),
            enumeration: field.enumeration.map(|e| e.values),
            pattern: field.pattern.map(|p| p.source),
            nullable: field.nullable,
            create_only: field.create_only,
            default: field.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_maps_flat_keywords_to_constraint_records() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "email",
            "type": "string",
            "minLength": 3,
            "maxLength": 50,
            "pattern": "^.+@.+$",
            "createOnly": true
        }))
        .unwrap();

        assert_eq!(field.name, "email");
        assert_eq!(field.field_type, FieldType::String);
        assert_eq!(
            field.length,
            Some(LengthBounds {
                min: Some(3),
                max: Some(50)
            })
        );
        assert_eq!(field.pattern.unwrap().source, "^.+@.+$");
        assert!(field.create_only);
        assert!(!field.nullable);
        assert!(field.enumeration.is_none());
    }

    #[test]
    fn deserialize_untyped_id_as_identity() {
        let field: FieldDescriptor = serde_json::from_value(json!({ "name": "id" })).unwrap();
        assert_eq!(field.field_type, FieldType::Identifier);
        assert!(field.is_identity());
    }

    #[test]
    fn deserialize_untyped_field_as_string() {
        let field: FieldDescriptor = serde_json::from_value(json!({ "name": "title" })).unwrap();
        assert_eq!(field.field_type, FieldType::String);
    }

    #[test]
    fn unknown_format_is_kept_verbatim() {
        let field: FieldDescriptor =
            serde_json::from_value(json!({ "name": "ip", "format": "ipv4" })).unwrap();
        assert_eq!(field.format, Some(FieldFormat::Other("ipv4".to_string())));
        assert_eq!(field.format.unwrap().to_string(), "ipv4");
    }

    #[test]
    fn serialize_uses_flat_keywords() {
        let field = FieldDescriptor::new("status", FieldType::String)
            .with_enum(["a", "b"])
            .nullable();
        let value = serde_json::to_value(&field).unwrap();

        assert_eq!(value["name"], "status");
        assert_eq!(value["type"], "string");
        assert_eq!(value["enum"], json!(["a", "b"]));
        assert_eq!(value["nullable"], true);
        assert_eq!(value["createOnly"], false);
        assert!(value.get("minLength").is_none());
    }

    #[test]
    fn length_bounds_absent_when_both_missing() {
        assert_eq!(LengthBounds::new(None, None), None);
        assert!(LengthBounds::new(Some(0), None).is_some());
    }

    #[test]
    fn date_requires_string_type() {
        let date = FieldDescriptor::new("born", FieldType::String).with_format(FieldFormat::Date);
        let not_date = FieldDescriptor::new("born", FieldType::Integer).with_format(FieldFormat::Date);
        assert!(date.is_date());
        assert!(!not_date.is_date());
        assert!(!not_date.needs_input_transform());
    }

    #[test]
    fn date_time_format_is_not_a_date() {
        let field = FieldDescriptor::new("seen_at", FieldType::String).with_format(FieldFormat::DateTime);
        assert!(!field.is_date());
        assert!(!field.needs_input_transform());
        assert_eq!(field.default_value(), "''");
    }

    #[test]
    fn identity_never_needs_validation() {
        assert!(!FieldDescriptor::identity("id").needs_validation());
    }

    #[test]
    fn needs_validation_rules() {
        let plain = FieldDescriptor::new("name", FieldType::String);
        let nullable = FieldDescriptor::new("nick", FieldType::String).nullable();
        let nullable_enum = FieldDescriptor::new("tier", FieldType::String)
            .nullable()
            .with_enum(["gold"]);

        assert!(plain.needs_validation());
        assert!(!nullable.needs_validation());
        assert!(nullable_enum.needs_validation());
    }

    #[test]
    fn default_value_by_type() {
        let cases = [
            (FieldDescriptor::new("a", FieldType::String), "''"),
            (FieldDescriptor::identity("a"), "''"),
            (FieldDescriptor::new("a", FieldType::Number), "0"),
            (FieldDescriptor::new("a", FieldType::Integer), "0"),
            (FieldDescriptor::new("a", FieldType::Boolean), "false"),
            (FieldDescriptor::new("a", FieldType::Object), "Map()"),
            (FieldDescriptor::new("a", FieldType::Array), "List()"),
            (FieldDescriptor::new("a", FieldType::Boolean).nullable(), "undefined"),
        ];
        for (field, expected) in cases {
            assert_eq!(field.default_value(), expected, "field type {}", field.field_type);
        }
    }

    #[test]
    fn explicit_default_wins() {
        let text = FieldDescriptor::new("role", FieldType::String).with_default("guest");
        let count = FieldDescriptor::new("n", FieldType::Integer).with_default(5);
        let date = FieldDescriptor::new("at", FieldType::String)
            .with_format(FieldFormat::Date)
            .with_default("2020-01-01");
        let object = FieldDescriptor::new("meta", FieldType::Object).with_default(json!({"a": 1}));

        assert_eq!(text.default_value(), "'guest'");
        assert_eq!(count.default_value(), "5");
        assert_eq!(date.default_value(), "new Date('2020-01-01')");
        assert_eq!(object.default_value(), r#"fromJS({"a":1})"#);
    }

    #[test]
    fn accessor_stem_capitalizes_mixed_name() {
        let field = FieldDescriptor::new("created_at", FieldType::String);
        assert_eq!(field.accessor_stem(), "CreatedAt");
    }
}
