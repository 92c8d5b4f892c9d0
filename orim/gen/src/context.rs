//! Generation contexts.
//!
//! A [`GenerationContext`] collects [`Fragment`] records per section while a
//! model's fields are processed. Finalizing it yields a [`RenderContext`]:
//! plain entry texts per section, ready for direct textual insertion into a
//! template. A render context is never mutated again.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::codegen::Fragment;
use crate::section::Section;

/// In-progress context for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    name: String,
    description: String,
    sections: BTreeMap<Section, Vec<Fragment>>,
}

impl GenerationContext {
    /// Creates a context with an empty sequence for each given section.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        sections: impl IntoIterator<Item = Section>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sections: sections.into_iter().map(|s| (s, Vec::new())).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sections present in this context, in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections.keys().copied()
    }

    pub fn fragments(&self, section: Section) -> &[Fragment] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push(&mut self, section: Section, fragment: Fragment) {
        self.sections.entry(section).or_default().push(fragment);
    }

    pub(crate) fn into_parts(self) -> (String, String, BTreeMap<Section, Vec<Fragment>>) {
        (self.name, self.description, self.sections)
    }
}

/// Finalized context handed to a template renderer.
///
/// Serializes as a flat map: `name`, `desc`, and one key per section whose
/// value is the section's entries joined by its layout's joiner.
///
/// ```text
/// { "name": "User", "desc": "...", "varnames": "static _idKey = 'id'\n  ...", ... }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    name: String,
    description: String,
    sections: BTreeMap<Section, Vec<String>>,
}

impl RenderContext {
    pub(crate) fn new(
        name: String,
        description: String,
        sections: BTreeMap<Section, Vec<String>>,
    ) -> Self {
        Self {
            name,
            description,
            sections,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections.keys().copied()
    }

    /// Final entry texts of a section.
    pub fn entries(&self, section: Section) -> &[String] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The section's entries joined for insertion into a template.
    pub fn joined(&self, section: Section) -> String {
        self.entries(section).join(section.layout().joiner)
    }

    /// Flat JSON view of the context, as consumed by template engines.
    pub fn to_value(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("name".to_string(), self.name.clone().into());
        map.insert("desc".to_string(), self.description.clone().into());
        for section in self.sections() {
            map.insert(section.to_string(), self.joined(section).into());
        }
        serde_json::Value::Object(map)
    }
}

impl Serialize for RenderContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len() + 2))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("desc", &self.description)?;
        for section in self.sections() {
            map.serialize_entry(&section.to_string(), &self.joined(section))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(code: &str) -> Fragment {
        Fragment {
            field: "f".to_string(),
            code: code.to_string(),
        }
    }

    #[test]
    fn new_context_has_empty_sections() {
        let ctx = GenerationContext::new("User", "Users", Section::TEMPLATE_ORDER);
        assert_eq!(ctx.sections().count(), 8);
        assert!(ctx.sections().all(|s| ctx.fragments(s).is_empty()));
        assert_eq!(ctx.name(), "User");
        assert_eq!(ctx.description(), "Users");
    }

    #[test]
    fn push_preserves_order() {
        let mut ctx = GenerationContext::new("User", "", Section::TEMPLATE_ORDER);
        ctx.push(Section::Getters, fragment("a"));
        ctx.push(Section::Getters, fragment("b"));
        let codes: Vec<_> = ctx.fragments(Section::Getters).iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, ["a", "b"]);
    }

    #[test]
    fn missing_section_reads_as_empty() {
        let ctx = GenerationContext::new("User", "", std::iter::empty());
        assert!(ctx.fragments(Section::Transforms).is_empty());
    }

    #[test]
    fn render_context_serializes_flat_map() {
        let mut sections = BTreeMap::new();
        sections.insert(Section::Payloads, vec!["a,".to_string(), "b".to_string()]);
        sections.insert(Section::Patterns, vec![]);
        let ctx = RenderContext::new("User".to_string(), "Users".to_string(), sections);

        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value["name"], "User");
        assert_eq!(value["desc"], "Users");
        assert_eq!(value["payloads"], "a,\n      b");
        assert_eq!(value["patterns"], "");
        assert_eq!(value, ctx.to_value());
    }
}
