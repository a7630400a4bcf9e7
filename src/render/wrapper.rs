//! Wrapper rendering
//!
//! Turns an extracted value into the markup written to the echo target.
//! Rendering is pure string production; the single document mutation stays
//! in the controller, which keeps this policy testable in isolation.
//!
//! Substitution rules differ by wrapper kind: template markup replaces
//! every occurrence of the placeholder, a literal wrapper string replaces
//! only the first.

use crate::dom::{Document, NodeId};
use crate::domain::EchoValue;

/// Placeholder token substituted with the stringified value
pub const VALUE_TOKEN: &str = "{{value}}";

/// Renders a value through a template element
///
/// Takes the template's first element child, serializes it to markup, and
/// replaces every occurrence of the placeholder.
///
/// # Returns
/// The rendered markup, or None when the template has no element child
pub fn apply_template(doc: &Document, template: NodeId, value: &EchoValue) -> Option<String> {
    let child = doc.first_element_child(template)?;
    Some(
        doc.outer_html(child)
            .replace(VALUE_TOKEN, &value.to_string()),
    )
}

/// Renders a value through a literal wrapper string
///
/// Only the first occurrence of the placeholder is replaced; an empty
/// wrapper string yields the raw value.
pub fn apply_literal(wrapper: &str, value: &EchoValue) -> String {
    if wrapper.is_empty() {
        value.to_string()
    } else {
        wrapper.replacen(VALUE_TOKEN, &value.to_string(), 1)
    }
}
