//! Per-field echo configuration
//!
//! Behavior is driven by `data-echo-*` attributes on the source control.
//! This module concentrates the attribute names and parses them once into
//! an explicit structure, so the controller never repeats string lookups
//! at event time.

use crate::dom::{Document, NodeId};

/// Id of the element that receives the echoed content (required)
pub const ATTR_TARGET: &str = "data-echo-target";
/// Marker: this field is never echoed
pub const ATTR_DISABLE: &str = "data-echo-disable";
/// Marker: this field is excluded from the initial full pass only
pub const ATTR_DISABLE_AUTOFILL: &str = "data-echo-disable-autofill";
/// Id of a template element whose first child wraps the value
pub const ATTR_WRAPPER_TEMPLATE: &str = "data-echo-wrapper-template";
/// Literal string wrapper with a `{{value}}` placeholder
pub const ATTR_WRAPPER: &str = "data-echo-wrapper";

/// How the echoed value gets wrapped before it reaches the target
///
/// A template wrapper takes precedence over a literal one when both
/// attributes are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperSpec {
    /// No wrapping: the stringified value is the content
    None,
    /// Id of a template element; its first element child's markup is used
    Template(String),
    /// Literal wrapper string; an empty string means the raw value
    Literal(String),
}

/// Echo configuration of one source field, parsed from its attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub target: Option<String>,
    pub disabled: bool,
    pub autofill_disabled: bool,
    pub wrapper: WrapperSpec,
}

impl FieldConfig {
    /// Reads the echo attributes of `source` into an explicit config
    pub fn from_element(doc: &Document, source: NodeId) -> Self {
        let wrapper = if let Some(template_id) = doc.attr(source, ATTR_WRAPPER_TEMPLATE) {
            WrapperSpec::Template(template_id.to_string())
        } else if let Some(text) = doc.attr(source, ATTR_WRAPPER) {
            WrapperSpec::Literal(text.to_string())
        } else {
            WrapperSpec::None
        };

        Self {
            target: doc.attr(source, ATTR_TARGET).map(str::to_string),
            disabled: doc.has_attr(source, ATTR_DISABLE),
            autofill_disabled: doc.has_attr(source, ATTR_DISABLE_AUTOFILL),
            wrapper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementInit;

    fn doc_with(init: ElementInit) -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let node = doc.append_element(root, init).unwrap();
        (doc, node)
    }

    #[test]
    fn bare_field_parses_to_defaults() {
        let (doc, input) = doc_with(ElementInit::text_input("x"));
        let config = FieldConfig::from_element(&doc, input);

        assert_eq!(
            config,
            FieldConfig {
                target: None,
                disabled: false,
                autofill_disabled: false,
                wrapper: WrapperSpec::None,
            }
        );
    }

    #[test]
    fn all_attributes_are_read() {
        let (doc, input) = doc_with(
            ElementInit::text_input("x")
                .attr(ATTR_TARGET, "out")
                .flag(ATTR_DISABLE)
                .flag(ATTR_DISABLE_AUTOFILL)
                .attr(ATTR_WRAPPER, "[{{value}}]"),
        );
        let config = FieldConfig::from_element(&doc, input);

        assert_eq!(config.target.as_deref(), Some("out"));
        assert!(config.disabled);
        assert!(config.autofill_disabled);
        assert_eq!(
            config.wrapper,
            WrapperSpec::Literal("[{{value}}]".to_string())
        );
    }

    #[test]
    fn template_wrapper_takes_precedence_over_literal() {
        let (doc, input) = doc_with(
            ElementInit::text_input("x")
                .attr(ATTR_WRAPPER_TEMPLATE, "tpl")
                .attr(ATTR_WRAPPER, "[{{value}}]"),
        );
        let config = FieldConfig::from_element(&doc, input);

        assert_eq!(config.wrapper, WrapperSpec::Template("tpl".to_string()));
    }

    #[test]
    fn empty_literal_wrapper_is_preserved() {
        let (doc, input) = doc_with(ElementInit::text_input("x").attr(ATTR_WRAPPER, ""));
        let config = FieldConfig::from_element(&doc, input);

        assert_eq!(config.wrapper, WrapperSpec::Literal(String::new()));
    }
}
