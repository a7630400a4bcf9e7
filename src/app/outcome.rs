//! Per-field echo outcomes
//!
//! Every echo attempt resolves to an explicit tagged outcome instead of a
//! logged early return, so callers and tests can tell failure causes
//! apart.

/// Why a field was not echoed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The controller never bound to a form; every operation is a no-op
    Unbound,
    /// The event target is not a recognized form control
    NotAControl,
    /// The field carries the disable marker
    Disabled,
    /// Initial pass only: the field carries the disable-autofill marker
    AutofillSuppressed,
    /// Initial pass only: the extracted value is empty
    EmptyValue,
    /// The field has no target-id attribute
    MissingTarget,
    /// The target id resolves to no element
    DanglingTarget,
    /// The wrapper-template id resolves to no element
    DanglingTemplate,
    /// The wrapper template exists but has no element child to render
    EmptyTemplate,
}

/// Result of one echo attempt on one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoOutcome {
    /// The target element's content was updated
    Echoed,
    /// Nothing was written; the reason says why
    Skipped(SkipReason),
}

impl EchoOutcome {
    pub fn is_echoed(&self) -> bool {
        matches!(self, Self::Echoed)
    }
}
