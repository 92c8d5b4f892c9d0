//! ORIM Definition Library
//!
//! This crate provides the typed descriptors consumed by `orim-gen` when it
//! synthesizes the source of an immutable model object. A schema loader
//! produces these descriptors; the generator only ever reads them.
//!
//! ## Core Types
//!
//! - [`ModelDescriptor`] - A named entity with a description and ordered fields
//! - [`FieldDescriptor`] - One field: type, format, constraints and flags
//! - [`FieldType`] - The semantic type of a field (string, object, identifier, ...)
//! - [`FieldFormat`] - A refinement of the type (e.g. `date`)
//! - [`LengthBounds`], [`EnumConstraint`], [`PatternConstraint`] - Optional
//!   constraint records; a constraint applies when its record is present
//!
//! ## Examples
//!
//! ```
//! use orim_define::{FieldDescriptor, FieldType, ModelDescriptor};
//!
//! let model = ModelDescriptor::new("User", "A registered user")
//!     .with_field(FieldDescriptor::identity("id"))
//!     .with_field(FieldDescriptor::new("email", FieldType::String).with_length(Some(3), Some(50)));
//!
//! assert_eq!(model.identity().map(|f| f.name.as_str()), Some("id"));
//! assert_eq!(model.ordinary_fields().count(), 1);
//! ```

pub mod error;
pub mod field;
pub mod js;
pub mod model;
pub mod naming;

pub use error::DefineError;
pub use field::{
    EnumConstraint, FieldDescriptor, FieldFormat, FieldType, LengthBounds, PatternConstraint,
};
pub use model::ModelDescriptor;
