//! Model descriptors.

use serde::{Deserialize, Serialize};

use crate::error::DefineError;
use crate::field::FieldDescriptor;

/// A named entity with an ordered list of fields.
///
/// Field order is significant: it is preserved in every generated section.
///
/// ## Examples
///
/// ```
/// use orim_define::ModelDescriptor;
///
/// let model = ModelDescriptor::from_json(r#"{
///     "name": "User",
///     "description": "A registered user",
///     "fields": [
///         { "name": "id" },
///         { "name": "email", "type": "string", "minLength": 3 }
///     ]
/// }"#).unwrap();
///
/// assert_eq!(model.name, "User");
/// assert_eq!(model.fields.len(), 2);
/// assert!(model.fields[0].is_identity());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model name; becomes the generated class name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fields: vec![],
        }
    }

    /// Appends a field, keeping declaration order.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Parses a descriptor document.
    pub fn from_json(json: &str) -> Result<Self, DefineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The first field whose upper-case identifier is `ID`.
    pub fn identity(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.is_identity())
    }

    /// Every field except identity fields, in declaration order.
    pub fn ordinary_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.is_identity())
    }
}
