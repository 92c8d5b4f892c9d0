//! Validation of model descriptors before assembly.
//!
//! Assembly relies on positional facts about the field list: the identity
//! field opens the default-value aggregate, so it must exist, be unique and
//! come first. Checking these up front means a bad model fails before any
//! fragment is produced.
//!
//! ## Validation Checks
//!
//! - **Identity field**: exactly one, declared first
//! - **Field names**: no raw name is declared twice, and no two names derive
//!   the same mixed-case identifier
//! - **Patterns**: every pattern source compiles
//!
//! ## Examples
//!
//! ```
//! use orim_define::{FieldDescriptor, FieldType, ModelDescriptor};
//! use orim_gen::validation::validate_model;
//!
//! let model = ModelDescriptor::new("User", "")
//!     .with_field(FieldDescriptor::identity("id"))
//!     .with_field(FieldDescriptor::new("email", FieldType::String));
//! assert!(validate_model(&model).is_ok());
//!
//! let headless = ModelDescriptor::new("User", "")
//!     .with_field(FieldDescriptor::new("email", FieldType::String));
//! assert!(validate_model(&headless).is_err());
//! ```

use std::collections::{HashMap, HashSet};

use orim_define::ModelDescriptor;

use crate::codegen::validators::compile_pattern;
use crate::errors::GeneratorError;

/// Validates a model descriptor before code generation.
///
/// ## Errors
///
/// - `MissingIdentityField` if no field's upper-case name is `ID`
/// - `DuplicateIdentityField` if more than one is
/// - `IdentityNotFirst` if another field precedes the identity field
/// - `DuplicateField` if two fields share a raw name
/// - `NamingCollision` if two raw names derive the same mixed-case identifier
/// - `InvalidPattern` if a pattern does not compile
pub fn validate_model(model: &ModelDescriptor) -> Result<(), GeneratorError> {
    let identities: Vec<usize> = model
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_identity())
        .map(|(index, _)| index)
        .collect();

    match identities.as_slice() {
        [] => {
            return Err(GeneratorError::MissingIdentityField {
                model: model.name.clone(),
            });
        }
        [0] => {}
        [_] => {
            return Err(GeneratorError::IdentityNotFirst {
                model: model.name.clone(),
                field: model.fields[0].name.clone(),
            });
        }
        _ => {
            return Err(GeneratorError::DuplicateIdentityField {
                model: model.name.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    let mut identifiers: HashMap<String, &str> = HashMap::new();
    for field in &model.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(GeneratorError::DuplicateField {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }
        let identifier = field.mixed_name();
        if let Some(first) = identifiers.get(&identifier) {
            return Err(GeneratorError::NamingCollision {
                model: model.name.clone(),
                first: first.to_string(),
                second: field.name.clone(),
                identifier,
            });
        }
        identifiers.insert(identifier, field.name.as_str());
        if let Some(pattern) = &field.pattern {
            compile_pattern(&model.name, field, pattern)?;
        }
    }

    Ok(())
}
