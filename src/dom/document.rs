//! In-memory document model
//!
//! This module is the environment the echo controller operates against. It
//! keeps an append-only node arena with an id registry, so identifiers
//! resolve through an explicit document handle instead of ambient global
//! state. Unexpected document shapes never panic the library side; misuse
//! of the construction/mutation API surfaces as a typed [`DocumentError`].

use crate::dom::node::{ControlState, ElementData, ElementInit, NodeId, NodeKind};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by document construction and host-side control mutation
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("An element with id \"{id}\" already exists")]
    DuplicateId { id: String },

    #[error("Node is not an element and cannot hold children or content")]
    NotAnElement,

    #[error("Element is not a form control")]
    NotAControl,

    #[error("Control does not support this mutation")]
    UnsupportedMutation,

    #[error("Select has no option with value \"{value}\"")]
    NoSuchOption { value: String },
}

struct Node {
    kind: NodeKind,
    children: Vec<NodeId>,
}

/// An in-memory document: node arena plus id registry
///
/// Documents grow by appending; nodes are never detached, so every
/// [`NodeId`] handed out stays valid. All controller operations receive the
/// document explicitly, which keeps the core logic testable without any
/// live UI environment.
pub struct Document {
    nodes: Vec<Node>,
    ids: HashMap<String, NodeId>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document with a `body` root element
    pub fn new() -> Self {
        let root_data = ElementData {
            tag: "body".to_string(),
            id: None,
            attrs: Vec::new(),
            control: None,
        };
        Self {
            nodes: vec![Node {
                kind: NodeKind::Element(root_data),
                children: Vec::new(),
            }],
            ids: HashMap::new(),
            root: NodeId(0),
        }
    }

    /// Root element of the document
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Appends a new element under `parent`
    ///
    /// # Returns
    /// The new element's id, or an error if `parent` cannot hold children
    /// or the element's id is already registered
    pub fn append_element(
        &mut self,
        parent: NodeId,
        init: ElementInit,
    ) -> Result<NodeId, DocumentError> {
        self.element(parent).ok_or(DocumentError::NotAnElement)?;
        if let Some(id) = &init.id {
            if self.ids.contains_key(id) {
                return Err(DocumentError::DuplicateId { id: id.clone() });
            }
        }

        let node_id = NodeId(self.nodes.len());
        if let Some(id) = &init.id {
            self.ids.insert(id.clone(), node_id);
        }
        self.nodes.push(Node {
            kind: NodeKind::Element(ElementData {
                tag: init.tag,
                id: init.id,
                attrs: init.attrs,
                control: init.control,
            }),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(node_id);
        Ok(node_id)
    }

    /// Appends an authored text node under `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, DocumentError> {
        self.element(parent).ok_or(DocumentError::NotAnElement)?;
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::Text(text.to_string()),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(node_id);
        Ok(node_id)
    }

    /// Resolves an element id through the registry
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Tag name of an element node
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|data| data.tag.as_str())
    }

    /// Value of an attribute, if present on an element node
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?
            .attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether an element node carries an attribute, regardless of value
    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    /// Control state of a form-control element, if any
    pub fn control(&self, node: NodeId) -> Option<&ControlState> {
        self.element(node)?.control.as_ref()
    }

    /// Sets the live value of an input or textarea control
    ///
    /// Models the host (or user) editing the field. The markup attributes
    /// the control was created with are not touched.
    pub fn set_value(&mut self, node: NodeId, value: &str) -> Result<(), DocumentError> {
        match self.control_mut(node)? {
            ControlState::Input {
                value: current, ..
            } => {
                *current = value.to_string();
                Ok(())
            }
            ControlState::TextArea { value: current } => {
                *current = value.to_string();
                Ok(())
            }
            ControlState::Select { .. } => Err(DocumentError::UnsupportedMutation),
        }
    }

    /// Sets the checked state of an input control
    pub fn set_checked(&mut self, node: NodeId, checked: bool) -> Result<(), DocumentError> {
        match self.control_mut(node)? {
            ControlState::Input {
                checked: current, ..
            } => {
                *current = checked;
                Ok(())
            }
            _ => Err(DocumentError::UnsupportedMutation),
        }
    }

    /// Marks one option of a select control as selected or not
    pub fn set_option_selected(
        &mut self,
        node: NodeId,
        value: &str,
        selected: bool,
    ) -> Result<(), DocumentError> {
        match self.control_mut(node)? {
            ControlState::Select { options, .. } => {
                let option = options
                    .iter_mut()
                    .find(|option| option.value == value)
                    .ok_or_else(|| DocumentError::NoSuchOption {
                        value: value.to_string(),
                    })?;
                option.selected = selected;
                Ok(())
            }
            _ => Err(DocumentError::UnsupportedMutation),
        }
    }

    /// Replaces an element's content with a markup string
    ///
    /// InnerHTML assignment semantics: the markup is stored wholesale and
    /// read back verbatim by [`Document::content`]. Existing children are
    /// discarded.
    pub fn set_content(&mut self, node: NodeId, markup: &str) -> Result<(), DocumentError> {
        self.element(node).ok_or(DocumentError::NotAnElement)?;
        let raw_id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::RawMarkup(markup.to_string()),
            children: Vec::new(),
        });
        self.nodes[node.index()].children = vec![raw_id];
        Ok(())
    }

    /// Serialized content of an element (its children as markup)
    ///
    /// Authored text is escaped; markup assigned via
    /// [`Document::set_content`] comes back verbatim.
    pub fn content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for &child in &self.nodes[node.index()].children {
            self.serialize(child, &mut out);
        }
        out
    }

    /// Serializes one element subtree to markup, including its own tag
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.serialize(node, &mut out);
        out
    }

    /// First child of `node` that is an element, skipping text
    pub fn first_element_child(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()]
            .children
            .iter()
            .copied()
            .find(|&child| self.element(child).is_some())
    }

    /// Preorder (document order) iterator over the descendants of `node`,
    /// excluding `node` itself
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.nodes[node.index()].children.clone();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    fn element(&self, node: NodeId) -> Option<&ElementData> {
        match &self.nodes.get(node.index())?.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    fn control_mut(&mut self, node: NodeId) -> Result<&mut ControlState, DocumentError> {
        match &mut self.nodes[node.index()].kind {
            NodeKind::Element(data) => data.control.as_mut().ok_or(DocumentError::NotAControl),
            _ => Err(DocumentError::NotAnElement),
        }
    }

    fn serialize(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.index()].kind {
            NodeKind::Text(text) => out.push_str(&escape_text(text)),
            NodeKind::RawMarkup(markup) => out.push_str(markup),
            NodeKind::Element(data) => {
                out.push('<');
                out.push_str(&data.tag);
                if let Some(id) = &data.id {
                    out.push_str(" id=\"");
                    out.push_str(&escape_attr(id));
                    out.push('"');
                }
                for (name, value) in &data.attrs {
                    out.push(' ');
                    out.push_str(name);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                }
                let children = &self.nodes[node.index()].children;
                if is_void_tag(&data.tag) && children.is_empty() {
                    out.push('>');
                    return;
                }
                out.push('>');
                for &child in children {
                    self.serialize(child, out);
                }
                out.push_str("</");
                out.push_str(&data.tag);
                out.push('>');
            }
        }
    }
}

/// Preorder traversal over a subtree, yielding element and text nodes alike
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        let children = &self.doc.nodes[node.index()].children;
        for &child in children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

fn is_void_tag(tag: &str) -> bool {
    matches!(tag, "input" | "br" | "hr" | "img" | "meta")
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
