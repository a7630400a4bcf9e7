//! Semantic value extraction
//!
//! Maps a form control onto the value that gets echoed. Text-like controls
//! yield their raw string, checkboxes yield their checked state, multiple
//! selects yield the joined values of their selected options. The uniform
//! emptiness check drives the initial-pass gating: an unchecked checkbox
//! and an empty string are equally "not ready to echo".

use crate::dom::ControlState;
use crate::domain::control::ControlKind;
use std::fmt;

/// Value of a form control as seen by the echo logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoValue {
    /// Raw string value, including joined multi-select values
    Text(String),
    /// Checked state of a checkbox
    Toggle(bool),
}

impl EchoValue {
    /// Extracts the semantic value of a control
    pub fn of(control: &ControlState) -> Self {
        match ControlKind::of(control) {
            ControlKind::TextLike => Self::Text(text_value(control)),
            ControlKind::Checkbox => match control {
                ControlState::Input { checked, .. } => Self::Toggle(*checked),
                _ => Self::Toggle(false),
            },
            ControlKind::MultiSelect => Self::Text(joined_selection(control)),
            ControlKind::Unsupported => Self::Text(String::new()),
        }
    }

    /// Uniform falsiness check applied before the initial full pass
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Toggle(checked) => !checked,
        }
    }
}

impl fmt::Display for EchoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Toggle(checked) => write!(f, "{}", checked),
        }
    }
}

fn text_value(control: &ControlState) -> String {
    match control {
        ControlState::Input { value, .. } => value.clone(),
        ControlState::TextArea { value } => value.clone(),
        // A single select resolves to its selected option, falling back to
        // the first option (default browser selection)
        ControlState::Select { options, .. } => options
            .iter()
            .find(|option| option.selected)
            .or_else(|| options.first())
            .map(|option| option.value.clone())
            .unwrap_or_default(),
    }
}

fn joined_selection(control: &ControlState) -> String {
    match control {
        ControlState::Select { options, .. } => options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}
