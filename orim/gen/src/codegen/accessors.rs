//! Getters and input transforms.

use orim_define::FieldDescriptor;

use super::{FieldSynthesizer, Fragment};

impl FieldSynthesizer<'_> {
    /// Read accessors for the field.
    ///
    /// Date-formatted strings get a second accessor returning the
    /// locale-formatted value, so the result has one or two fragments.
    pub fn getters(&self, field: &FieldDescriptor) -> Vec<Fragment> {
        let stem = field.accessor_stem();
        let key = self.key_ref(field);

        let mut getters = vec![Fragment::new(
            field,
            format!("get{stem} () {{ return this._data.get({key}) }}"),
        )];
        if field.is_date() {
            getters.push(Fragment::new(
                field,
                format!("get{stem}String () {{ return this._data.get({key}).toLocaleString() }}"),
            ));
        }
        getters
    }

    /// Statement replacing the transmitted representation of a date field
    /// in a freshly received payload with a `Date`.
    pub fn input_transform(&self, field: &FieldDescriptor) -> Fragment {
        let key = self.key_ref(field);
        Fragment::new(
            field,
            format!("this._data = this._data.set({key}, new Date(paramObj[{key}]))"),
        )
    }
}
