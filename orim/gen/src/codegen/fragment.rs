//! Fragment records.

use orim_define::FieldDescriptor;

/// One generated piece of code, attributed to the field it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Raw name of the originating field.
    pub field: String,
    /// Code text without any trailing separator.
    pub code: String,
}

impl Fragment {
    pub fn new(field: &FieldDescriptor, code: impl Into<String>) -> Self {
        Self {
            field: field.name.clone(),
            code: code.into(),
        }
    }
}
