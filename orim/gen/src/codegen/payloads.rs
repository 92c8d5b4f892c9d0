//! Payload elements and create-only stripping.

use orim_define::js::{is_identifier, string_literal};
use orim_define::{FieldDescriptor, FieldType};

use super::{FieldSynthesizer, Fragment};

impl FieldSynthesizer<'_> {
    /// Key/value pair of the serialized payload.
    ///
    /// Objects are converted back to plain structures (`.toJS()`) and dates
    /// to their canonical JSON string (`.toJSON()`).
    pub fn payload_element(&self, field: &FieldDescriptor) -> Fragment {
        let transform = if field.field_type == FieldType::Object {
            ".toJS()"
        } else if field.is_date() {
            ".toJSON()"
        } else {
            ""
        };
        Fragment::new(
            field,
            format!(
                "[{}]: {}{transform}",
                self.key_ref(field),
                self.accessor_call(field)
            ),
        )
    }

    /// Statement removing a create-only field from an update payload.
    pub fn create_only(&self, field: &FieldDescriptor) -> Fragment {
        let code = if is_identifier(&field.name) {
            format!("delete payload.{}", field.name)
        } else {
            format!("delete payload[{}]", string_literal(&field.name))
        };
        Fragment::new(field, code)
    }
}
