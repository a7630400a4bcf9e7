//! Node-level building blocks for the document model
//!
//! Defines the handle type used to address nodes, the state carried by form
//! controls, and the `ElementInit` descriptor used to grow a document.

/// Handle to a node stored in a [`Document`](crate::dom::Document) arena
///
/// Ids are plain indices: cheap to copy, valid for the lifetime of the
/// document they came from. Nodes are never removed, so a handle never
/// dangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Live state of a form control
///
/// This is the property side of a control (what scripting sees), as opposed
/// to its serialized attributes. Editing a control changes this state only;
/// the markup attributes it was created with stay untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlState {
    /// An `<input>` of any type. `checked` is only meaningful for
    /// checkbox/radio types.
    Input {
        input_type: String,
        value: String,
        checked: bool,
    },
    /// A `<textarea>`
    TextArea { value: String },
    /// A `<select>`, single or multiple
    Select {
        multiple: bool,
        options: Vec<SelectOption>,
    },
}

/// One `<option>` inside a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            selected,
        }
    }
}

impl ControlState {
    /// Creates a plain text input with an initial value
    pub fn text_input(value: &str) -> Self {
        Self::typed_input("text", value)
    }

    /// Creates an input of an arbitrary type with an initial value
    pub fn typed_input(input_type: &str, value: &str) -> Self {
        Self::Input {
            input_type: input_type.to_string(),
            value: value.to_string(),
            checked: false,
        }
    }

    /// Creates a checkbox input
    pub fn checkbox(checked: bool) -> Self {
        Self::Input {
            input_type: "checkbox".to_string(),
            value: "on".to_string(),
            checked,
        }
    }

    /// Creates a radio input carrying the given submit value
    pub fn radio(value: &str, checked: bool) -> Self {
        Self::Input {
            input_type: "radio".to_string(),
            value: value.to_string(),
            checked,
        }
    }

    /// Creates a textarea with initial content
    pub fn textarea(value: &str) -> Self {
        Self::TextArea {
            value: value.to_string(),
        }
    }

    /// Creates a single-choice select from its options
    pub fn select_one(options: Vec<SelectOption>) -> Self {
        Self::Select {
            multiple: false,
            options,
        }
    }

    /// Creates a multiple-choice select from its options
    pub fn select_multiple(options: Vec<SelectOption>) -> Self {
        Self::Select {
            multiple: true,
            options,
        }
    }

    /// DOM-style type string for this control
    ///
    /// Matches what the browser reports through the `type` property:
    /// inputs report their type attribute, textareas report `textarea`,
    /// selects report `select-one` or `select-multiple`.
    pub fn dom_type(&self) -> &str {
        match self {
            Self::Input { input_type, .. } => input_type,
            Self::TextArea { .. } => "textarea",
            Self::Select {
                multiple: false, ..
            } => "select-one",
            Self::Select { multiple: true, .. } => "select-multiple",
        }
    }
}

/// Payload of a node in the arena
#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Element(ElementData),
    /// Authored text, escaped on serialization
    Text(String),
    /// Markup assigned wholesale via content replacement, serialized verbatim
    RawMarkup(String),
}

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub tag: String,
    pub id: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub control: Option<ControlState>,
}

/// Descriptor for a new element, consumed by
/// [`Document::append_element`](crate::dom::Document::append_element)
///
/// Built fluently: tag first, then id, attributes, and control state as
/// needed. Convenience constructors cover the common form-control shapes.
#[derive(Debug, Clone)]
pub struct ElementInit {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) control: Option<ControlState>,
}

impl ElementInit {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            attrs: Vec::new(),
            control: None,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Marker attribute with no value, e.g. `data-echo-disable`
    pub fn flag(self, name: &str) -> Self {
        self.attr(name, "")
    }

    pub fn control(mut self, control: ControlState) -> Self {
        self.control = Some(control);
        self
    }

    /// `<form id="...">`
    pub fn form(id: &str) -> Self {
        Self::new("form").id(id)
    }

    /// `<template id="...">`
    pub fn template(id: &str) -> Self {
        Self::new("template").id(id)
    }

    /// `<input type="...">` with matching control state
    pub fn input(input_type: &str, value: &str) -> Self {
        Self::new("input")
            .attr("type", input_type)
            .control(ControlState::typed_input(input_type, value))
    }

    /// `<input type="text">` with matching control state
    pub fn text_input(value: &str) -> Self {
        Self::input("text", value)
    }

    /// `<input type="checkbox">` with matching control state
    pub fn checkbox(checked: bool) -> Self {
        Self::new("input")
            .attr("type", "checkbox")
            .control(ControlState::checkbox(checked))
    }

    /// `<textarea>` with matching control state
    pub fn textarea(value: &str) -> Self {
        Self::new("textarea").control(ControlState::textarea(value))
    }

    /// `<select>` with matching control state
    pub fn select(multiple: bool, options: Vec<SelectOption>) -> Self {
        let control = if multiple {
            ControlState::select_multiple(options)
        } else {
            ControlState::select_one(options)
        };
        Self::new("select").control(control)
    }
}
