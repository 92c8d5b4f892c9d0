//! Shared test utilities for orim-gen tests.
//!
//! This module provides common fixtures so unit tests across the crate
//! build models the same way.

use std::path::Path;

use orim_define::{FieldDescriptor, FieldFormat, FieldType, ModelDescriptor};

use crate::context::RenderContext;
use crate::errors::GeneratorError;
use crate::render::TemplateRenderer;

/// A non-nullable, unconstrained string field.
pub fn string_field(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldType::String)
}

/// A string field with the `date` format.
pub fn date_field(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldType::String).with_format(FieldFormat::Date)
}

/// The `User` model: identity plus a bounded email.
pub fn make_user_model() -> ModelDescriptor {
    ModelDescriptor::new("User", "A registered user")
        .with_field(FieldDescriptor::identity("id"))
        .with_field(string_field("email").with_length(Some(3), Some(50)))
}

/// Replaces `{{key}}` with the matching value of the context's JSON view.
pub struct PlaceholderRenderer {
    template: String,
}

impl PlaceholderRenderer {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, _template: &Path, context: &RenderContext) -> Result<String, GeneratorError> {
        let value = context.to_value();
        let map = value
            .as_object()
            .ok_or_else(|| GeneratorError::RenderError("context is not a map".to_string()))?;

        let mut out = self.template.clone();
        for (key, value) in map {
            let text = value.as_str().unwrap_or_default();
            out = out.replace(&format!("{{{{{key}}}}}"), text);
        }
        Ok(out)
    }
}
