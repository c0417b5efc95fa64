//! Themed building blocks for settings screens.

mod form_field;

pub use form_field::{
    FieldStyles, FormFieldProps, UpdateValue, ValueUpdate, field_styles, form_field,
    render_form_field,
};
