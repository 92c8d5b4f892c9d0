//! Hand-off to a template renderer.
//!
//! Template parsing and placeholder substitution belong to an external
//! engine. This module only defines the seam ([`TemplateRenderer`]) and the
//! glue that assembles a context, renders it and computes where the result
//! belongs. Nothing is written to disk here.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use orim_define::ModelDescriptor;

use crate::assembler::ContextAssembler;
use crate::config::GeneratorConfig;
use crate::context::RenderContext;
use crate::errors::GeneratorError;

/// Substitutes a finalized context into a template.
pub trait TemplateRenderer {
    fn render(&self, template: &Path, context: &RenderContext) -> Result<String, GeneratorError>;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&Path, &RenderContext) -> Result<String, GeneratorError>,
{
    fn render(&self, template: &Path, context: &RenderContext) -> Result<String, GeneratorError> {
        self(template, context)
    }
}

/// Rendered source for one model and the path it should be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModel {
    pub model: String,
    pub output_path: PathBuf,
    pub source: String,
}

/// Assembles and renders the model object source for one model.
///
/// ## Errors
///
/// Returns any assembly error for the model, or the renderer's error.
#[instrument(skip_all, fields(model = %model.name))]
pub fn generate_model<R>(
    config: &GeneratorConfig,
    model: &ModelDescriptor,
    renderer: &R,
) -> Result<GeneratedModel, GeneratorError>
where
    R: TemplateRenderer + ?Sized,
{
    let context = ContextAssembler::new().assemble(model)?;
    let source = renderer.render(&config.template_path(), &context)?;
    let output_path = config.output_path(&model.name);

    info!(output = %output_path.display(), "Model source generated");
    Ok(GeneratedModel {
        model: model.name.clone(),
        output_path,
        source,
    })
}

/// Generates every model independently; one model's failure does not
/// affect the others.
pub fn generate_models<R>(
    config: &GeneratorConfig,
    models: &[ModelDescriptor],
    renderer: &R,
) -> Vec<Result<GeneratedModel, GeneratorError>>
where
    R: TemplateRenderer + ?Sized,
{
    models
        .iter()
        .map(|model| {
            let result = generate_model(config, model, renderer);
            if let Err(err) = &result {
                warn!(model = %model.name, error = %err, "Skipping model");
            }
            result
        })
        .collect()
}
