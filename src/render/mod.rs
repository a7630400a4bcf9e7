//! Rendering policy for echoed values

pub mod wrapper;

pub use wrapper::{apply_literal, apply_template, VALUE_TOKEN};
