//! Per-field code synthesis.
//!
//! A [`FieldSynthesizer`] turns one field descriptor into JavaScript
//! fragments for the model object template. Each rule is a pure method:
//! same model name and field in, same [`Fragment`] out. Rules never emit
//! trailing separators or closing delimiters; those are positional and
//! belong to [`crate::section::SectionLayout`].
//!
//! ## Submodules
//!
//! - [`constants`] - Field-name key constants and default values
//! - [`accessors`] - Getters and the date input transform
//! - [`validators`] - Validators, creation-time validation calls, pattern declarations
//! - [`payloads`] - Payload elements and create-only stripping
//!
//! ## Example Output
//!
//! For model `User` and a `string` field `email`:
//!
//! ```text
//! static _emailKey = 'email'
//! [User._emailKey]: ''
//! getEmail () { return this._data.get(User._emailKey) }
//! isEmailValid () { return this.getEmail() !== undefined }
//! [User._emailKey]: this.getEmail()
//! if (!this.isEmailValid()) { return User.msgs.invalidEmailMessage }
//! ```

pub mod accessors;
pub mod constants;
pub mod fragment;
pub mod payloads;
pub mod validators;

pub use fragment::Fragment;

use orim_define::FieldDescriptor;

/// Generates code fragments for the fields of one model.
#[derive(Debug, Clone, Copy)]
pub struct FieldSynthesizer<'a> {
    model_name: &'a str,
}

impl<'a> FieldSynthesizer<'a> {
    pub fn new(model_name: &'a str) -> Self {
        Self { model_name }
    }

    pub fn model_name(&self) -> &'a str {
        self.model_name
    }

    /// Reference to the field's static key constant, e.g. `User._emailKey`.
    fn key_ref(&self, field: &FieldDescriptor) -> String {
        format!("{}._{}Key", self.model_name, field.mixed_name())
    }

    /// Call of the field's accessor on the instance, e.g. `this.getEmail()`.
    fn accessor_call(&self, field: &FieldDescriptor) -> String {
        format!("this.get{}()", field.accessor_stem())
    }
}
