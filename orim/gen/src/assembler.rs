//! Context assembly for model object templates.
//!
//! The [`ContextAssembler`] owns the list of sections a model object
//! template expects. For one model it:
//!
//! 1. initializes an empty context (name, description, one empty sequence
//!    per section),
//! 2. feeds each field, in declaration order, through the
//!    [`FieldSynthesizer`] and appends the fragments to their sections,
//! 3. finalizes positional syntax (separators and closers) per section.
//!
//! ## Section Gating
//!
//! | Section | Emitted when |
//! |---|---|
//! | varnames, defvals, getters | always |
//! | transforms | `needs_input_transform()` |
//! | validators, newvalids | `needs_validation()` |
//! | payloads | field is not the identity field |
//! | createOnlys | `create_only` |
//! | patterns | a pattern is present |

use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use orim_define::{FieldDescriptor, ModelDescriptor, naming};

use crate::codegen::{FieldSynthesizer, Fragment};
use crate::context::{GenerationContext, RenderContext};
use crate::errors::GeneratorError;
use crate::section::Section;
use crate::validation::validate_model;

/// Builds generation contexts for model object templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextAssembler {
    sections: Vec<Section>,
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextAssembler {
    /// Creates an assembler for every [`Section`], including `transforms`.
    pub fn new() -> Self {
        Self {
            sections: Section::iter().collect(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Seeds a context with the model's name and description and an empty
    /// sequence for every section. No field is processed.
    pub fn initialize(&self, model: &ModelDescriptor) -> GenerationContext {
        GenerationContext::new(
            model.name.as_str(),
            model.description.as_str(),
            self.sections.iter().copied(),
        )
    }

    /// Synthesizes one field's fragments and appends them to the context.
    ///
    /// All fragments are produced before any is appended, so a failing
    /// field leaves the context untouched.
    ///
    /// ## Errors
    ///
    /// - `MissingIdentityField` if an ordinary field arrives before the
    ///   identity field opened the default-value aggregate
    /// - `IdentityNotFirst` / `DuplicateIdentityField` if the identity
    ///   field arrives after other fields
    /// - `InvalidPattern` if the field's pattern does not compile
    pub fn process(
        &self,
        ctx: &mut GenerationContext,
        field: &FieldDescriptor,
    ) -> Result<(), GeneratorError> {
        check_position(ctx, field)?;

        let synth = FieldSynthesizer::new(ctx.name());
        let mut fragments: Vec<(Section, Fragment)> = vec![
            (Section::Varnames, synth.field_constant(field)),
            (Section::Defvals, synth.default_value(field)),
        ];
        fragments.extend(
            synth
                .getters(field)
                .into_iter()
                .map(|getter| (Section::Getters, getter)),
        );
        if field.needs_input_transform() {
            fragments.push((Section::Transforms, synth.input_transform(field)));
        }
        if field.needs_validation() {
            fragments.push((Section::Validators, synth.validator(field)));
            fragments.push((Section::Newvalids, synth.new_validation(field)));
        }
        if !field.is_identity() {
            fragments.push((Section::Payloads, synth.payload_element(field)));
        }
        if field.create_only {
            fragments.push((Section::CreateOnlys, synth.create_only(field)));
        }
        if let Some(pattern) = synth.pattern_declaration(field)? {
            fragments.push((Section::Patterns, pattern));
        }

        debug!(
            model = %ctx.name(),
            field = %field.name,
            fragments = fragments.len(),
            "Processed field"
        );
        for (section, fragment) in fragments {
            ctx.push(section, fragment);
        }
        Ok(())
    }

    /// Applies each section's layout: terminators on all entries but the
    /// last, closers on the last. Empty sections stay empty.
    pub fn finalize(&self, ctx: GenerationContext) -> RenderContext {
        let (name, description, sections) = ctx.into_parts();
        let sections = sections
            .into_iter()
            .map(|(section, fragments)| {
                let entries = section.layout().finish(&fragments);
                debug!(section = %section, entries = entries.len(), "Finalized section");
                (section, entries)
            })
            .collect();
        RenderContext::new(name, description, sections)
    }

    /// Validates the model, processes every field and finalizes the context.
    #[instrument(skip(self, model), fields(model = %model.name))]
    pub fn assemble(&self, model: &ModelDescriptor) -> Result<RenderContext, GeneratorError> {
        if let Err(err) = validate_model(model) {
            warn!(error = %err, "Model validation failed");
            return Err(err);
        }

        let mut ctx = self.initialize(model);
        for field in &model.fields {
            self.process(&mut ctx, field)?;
        }
        let context = self.finalize(ctx);

        info!(fields = model.fields.len(), "Generation context assembled");
        Ok(context)
    }
}

/// Rejects fields that would break the default-value aggregate: it has to
/// be opened by exactly one identity field before anything else is added.
fn check_position(ctx: &GenerationContext, field: &FieldDescriptor) -> Result<(), GeneratorError> {
    let opened_by = ctx.fragments(Section::Defvals).first();
    match (field.is_identity(), opened_by) {
        (true, None) | (false, Some(_)) => Ok(()),
        (false, None) => Err(GeneratorError::MissingIdentityField {
            model: ctx.name().to_string(),
        }),
        (true, Some(first)) if naming::upper_case(&first.field) == naming::IDENTITY_UPPER_NAME => {
            Err(GeneratorError::DuplicateIdentityField {
                model: ctx.name().to_string(),
            })
        }
        (true, Some(first)) => Err(GeneratorError::IdentityNotFirst {
            model: ctx.name().to_string(),
            field: first.field.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date_field, make_user_model, string_field};
    use orim_define::FieldType;

    #[test]
    fn initialize_seeds_every_section_empty() {
        let assembler = ContextAssembler::new();
        let ctx = assembler.initialize(&make_user_model());

        assert_eq!(ctx.name(), "User");
        assert_eq!(ctx.description(), "A registered user");
        assert_eq!(ctx.sections().count(), 9);
        assert!(ctx.sections().all(|s| ctx.fragments(s).is_empty()));
    }

    #[test]
    fn process_identity_field() {
        let assembler = ContextAssembler::new();
        let mut ctx = assembler.initialize(&make_user_model());
        assembler
            .process(&mut ctx, &FieldDescriptor::identity("id"))
            .unwrap();

        assert_eq!(ctx.fragments(Section::Varnames).len(), 1);
        assert_eq!(ctx.fragments(Section::Defvals).len(), 1);
        assert_eq!(ctx.fragments(Section::Getters).len(), 1);
        assert!(ctx.fragments(Section::Payloads).is_empty());
        assert!(ctx.fragments(Section::Validators).is_empty());
        assert!(ctx.fragments(Section::Newvalids).is_empty());
    }

    #[test]
    fn process_date_field_adds_transform_and_two_getters() {
        let assembler = ContextAssembler::new();
        let mut ctx = assembler.initialize(&make_user_model());
        assembler
            .process(&mut ctx, &FieldDescriptor::identity("id"))
            .unwrap();
        assembler.process(&mut ctx, &date_field("created_at")).unwrap();

        assert_eq!(ctx.fragments(Section::Getters).len(), 3);
        assert_eq!(ctx.fragments(Section::Transforms).len(), 1);
        assert_eq!(ctx.fragments(Section::Payloads).len(), 1);
    }

    #[test]
    fn process_rejects_field_before_identity() {
        let assembler = ContextAssembler::new();
        let mut ctx = assembler.initialize(&make_user_model());
        let err = assembler
            .process(&mut ctx, &string_field("email"))
            .unwrap_err();

        assert!(matches!(err, GeneratorError::MissingIdentityField { .. }));
        assert!(ctx.sections().all(|s| ctx.fragments(s).is_empty()));
    }

    #[test]
    fn process_rejects_late_identity() {
        let assembler = ContextAssembler::new();
        let mut ctx = assembler.initialize(&make_user_model());
        assembler
            .process(&mut ctx, &FieldDescriptor::identity("id"))
            .unwrap();
        let err = assembler
            .process(&mut ctx, &FieldDescriptor::identity("Id"))
            .unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateIdentityField { .. }));
    }

    #[test]
    fn invalid_pattern_leaves_context_untouched() {
        let assembler = ContextAssembler::new();
        let mut ctx = assembler.initialize(&make_user_model());
        assembler
            .process(&mut ctx, &FieldDescriptor::identity("id"))
            .unwrap();
        let before = ctx.clone();

        let bad = string_field("zip").with_pattern("(");
        assert!(assembler.process(&mut ctx, &bad).is_err());
        assert_eq!(ctx, before);
    }

    #[test]
    fn finalize_identity_only_model() {
        let assembler = ContextAssembler::new();
        let model = ModelDescriptor::new("Token", "").with_field(FieldDescriptor::identity("id"));
        let context = assembler.assemble(&model).unwrap();

        assert_eq!(
            context.entries(Section::Defvals),
            ["this._data = Map({[Token._IdentityKey]: Token._NewID})"]
        );
        assert!(context.entries(Section::Payloads).is_empty());
    }

    #[test]
    fn assemble_runs_validation_first() {
        let assembler = ContextAssembler::new();
        let model = ModelDescriptor::new("User", "")
            .with_field(FieldDescriptor::identity("id"))
            .with_field(FieldDescriptor::new("a", FieldType::String))
            .with_field(FieldDescriptor::new("a", FieldType::Number));
        assert!(matches!(
            assembler.assemble(&model),
            Err(GeneratorError::DuplicateField { .. })
        ));
    }

    #[test]
    #[tracing_test::traced_test]
    fn assemble_emits_tracing_events() {
        let assembler = ContextAssembler::new();
        assembler.assemble(&make_user_model()).unwrap();

        assert!(logs_contain("Processed field"));
        assert!(logs_contain("Finalized section"));
        assert!(logs_contain("Generation context assembled"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn assemble_logs_validation_failure() {
        let assembler = ContextAssembler::new();
        let model = ModelDescriptor::new("User", "").with_field(string_field("email"));
        assert!(assembler.assemble(&model).is_err());
        assert!(logs_contain("Model validation failed"));
    }
}
