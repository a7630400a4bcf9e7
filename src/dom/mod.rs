//! Document model: node arena, form-control state, id registry

pub mod document;
pub mod node;

pub use document::{Document, DocumentError};
pub use node::{ControlState, ElementInit, NodeId, SelectOption};
