//! Control classification
//!
//! Maps a control's DOM-style type string onto the handful of behaviors
//! the echo logic distinguishes. Everything not explicitly recognized is
//! treated as unsupported and yields no value.

use crate::dom::ControlState;

/// Echo behavior class of a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Controls whose value is a plain string, including single selects,
    /// radios, and textareas
    TextLike,
    /// Checkbox inputs, whose semantic value is their checked state
    Checkbox,
    /// Multiple selects, whose value is the joined selected options
    MultiSelect,
    /// Anything else (file, hidden, submit, ...)
    Unsupported,
}

impl ControlKind {
    /// Classifies a DOM type string
    pub fn from_dom_type(dom_type: &str) -> Self {
        match dom_type {
            "text" | "password" | "email" | "url" | "tel" | "search" | "number" | "range"
            | "color" | "date" | "datetime-local" | "month" | "week" | "time" | "select-one"
            | "radio" | "textarea" => Self::TextLike,
            "checkbox" => Self::Checkbox,
            "select-multiple" => Self::MultiSelect,
            _ => Self::Unsupported,
        }
    }

    /// Classifies a control by its reported DOM type
    pub fn of(control: &ControlState) -> Self {
        Self::from_dom_type(control.dom_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_like_types_are_recognized() {
        for dom_type in [
            "text",
            "password",
            "email",
            "url",
            "tel",
            "search",
            "number",
            "range",
            "color",
            "date",
            "datetime-local",
            "month",
            "week",
            "time",
            "select-one",
            "radio",
            "textarea",
        ] {
            assert_eq!(
                ControlKind::from_dom_type(dom_type),
                ControlKind::TextLike,
                "type {dom_type}"
            );
        }
    }

    #[test]
    fn special_types_get_their_own_kind() {
        assert_eq!(
            ControlKind::from_dom_type("checkbox"),
            ControlKind::Checkbox
        );
        assert_eq!(
            ControlKind::from_dom_type("select-multiple"),
            ControlKind::MultiSelect
        );
    }

    #[test]
    fn unknown_types_are_unsupported() {
        for dom_type in ["file", "hidden", "submit", "button", ""] {
            assert_eq!(
                ControlKind::from_dom_type(dom_type),
                ControlKind::Unsupported,
                "type {dom_type:?}"
            );
        }
    }

    #[test]
    fn classification_follows_control_state() {
        assert_eq!(
            ControlKind::of(&ControlState::checkbox(false)),
            ControlKind::Checkbox
        );
        assert_eq!(
            ControlKind::of(&ControlState::select_multiple(vec![])),
            ControlKind::MultiSelect
        );
        assert_eq!(
            ControlKind::of(&ControlState::typed_input("file", "")),
            ControlKind::Unsupported
        );
    }
}
