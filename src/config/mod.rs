//! Configuration module for form-echo
//!
//! Concentrates the attribute-driven per-field configuration: the
//! recognized `data-echo-*` attribute names and the structure they parse
//! into, shared between the controller's validation and rendering paths.

pub mod field;

pub use field::{FieldConfig, WrapperSpec};
pub use field::{
    ATTR_DISABLE, ATTR_DISABLE_AUTOFILL, ATTR_TARGET, ATTR_WRAPPER, ATTR_WRAPPER_TEMPLATE,
};
