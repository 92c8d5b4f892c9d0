//! ORIM model object generator library.
//!
//! This crate builds the generation context for an immutable model object:
//! named, ordered sections of JavaScript fragments that a template engine
//! substitutes into a model object template. Given a model descriptor from
//! `orim-define`, it produces:
//!
//! - Static key constants binding each field to its raw payload name
//! - A default-value `Map({...})` for new instances
//! - Getters (plus locale-string getters for dates)
//! - Validators and the creation-time validation guard clauses
//! - Payload elements for serialization, create-only stripping for updates
//! - Pattern matcher declarations and date input transforms
//!
//! ## Modules
//!
//! - [`codegen`] - Per-field code synthesis rules
//! - [`section`] - Section names and their separator/closer layouts
//! - [`context`] - In-progress and finalized generation contexts
//! - [`assembler`] - Initialization, per-field processing and finalization
//! - [`validation`] - Model checks run before assembly
//! - [`config`] - Template and output path configuration
//! - [`render`] - The template renderer seam
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use orim_define::{FieldDescriptor, FieldType, ModelDescriptor};
//! use orim_gen::assembler::ContextAssembler;
//! use orim_gen::section::Section;
//!
//! let model = ModelDescriptor::new("User", "A registered user")
//!     .with_field(FieldDescriptor::identity("id"))
//!     .with_field(FieldDescriptor::new("email", FieldType::String).with_length(Some(3), Some(50)));
//!
//! let context = ContextAssembler::new().assemble(&model).unwrap();
//!
//! assert_eq!(context.entries(Section::Defvals), [
//!     "this._data = Map({[User._IdentityKey]: User._NewID,",
//!     "[User._emailKey]: ''})",
//! ]);
//! assert_eq!(context.entries(Section::Payloads), ["[User._emailKey]: this.getEmail()"]);
//! ```

pub mod assembler;
pub mod codegen;
pub mod config;
pub mod context;
pub mod errors;
pub mod render;
pub mod section;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use assembler::ContextAssembler;
pub use codegen::{FieldSynthesizer, Fragment};
pub use config::GeneratorConfig;
pub use context::{GenerationContext, RenderContext};
pub use errors::{ErrorKind, GeneratorError};
pub use render::{GeneratedModel, TemplateRenderer, generate_model, generate_models};
pub use section::{Section, SectionLayout};
