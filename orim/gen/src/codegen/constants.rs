//! Key constants and default values.

use orim_define::FieldDescriptor;
use orim_define::js::string_literal;

use super::{FieldSynthesizer, Fragment};

/// Static key constant the template declares for the identity field.
pub const IDENTITY_KEY: &str = "_IdentityKey";

/// Sentinel the template declares for "not yet assigned by the backend".
pub const NEW_ID: &str = "_NewID";

impl FieldSynthesizer<'_> {
    /// Static constant holding the raw field name used in payloads.
    ///
    /// ```text
    /// static _createdAtKey = 'created_at'
    /// ```
    pub fn field_constant(&self, field: &FieldDescriptor) -> Fragment {
        Fragment::new(
            field,
            format!("static _{}Key = {}", field.mixed_name(), string_literal(&field.name)),
        )
    }

    /// Entry of the default-value map built for new instances.
    ///
    /// The identity field opens the `Map({...})` literal and binds the
    /// identity key to the new-ID sentinel; every other field binds its
    /// key constant to its default value. Separators and the closing `})`
    /// are added when the section is finalized.
    pub fn default_value(&self, field: &FieldDescriptor) -> Fragment {
        let code = if field.is_identity() {
            format!(
                "this._data = Map({{[{model}.{IDENTITY_KEY}]: {model}.{NEW_ID}",
                model = self.model_name()
            )
        } else {
            format!("[{}]: {}", self.key_ref(field), field.default_value())
        };
        Fragment::new(field, code)
    }
}
