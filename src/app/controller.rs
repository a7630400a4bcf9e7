//! Echo controller and coordination layer
//!
//! The controller binds to one form at construction time, runs one full
//! pass over the form's eligible fields (reflecting default and autofilled
//! values), and then mirrors every input-change event the host delivers
//! into the configured echo targets. All failure modes are non-fatal and
//! absorbed per field; at worst a given target is never updated.

use crate::app::outcome::{EchoOutcome, SkipReason};
use crate::config::{FieldConfig, WrapperSpec, ATTR_TARGET};
use crate::dom::{Document, NodeId};
use crate::domain::EchoValue;
use crate::input::InputEvent;
use crate::render;
use tracing::{error, trace, warn};

/// Binds form input changes to live echo displays
///
/// Holds only the bound form's handle; the current document state is the
/// only memory, re-read on every event. The document is passed explicitly
/// into each operation, so the controller never touches ambient global
/// state.
pub struct EchoController {
    /// Bound form, or None when binding failed and the controller is inert
    form: Option<NodeId>,
}

impl EchoController {
    /// Binds a controller to the form with the given id
    ///
    /// Runs the initial full echo pass synchronously before returning, so
    /// default and autofilled values are reflected before any live event
    /// can arrive. When the id resolves to no element the failure is
    /// logged and the returned controller is permanently inert: every
    /// later operation reports [`SkipReason::Unbound`].
    pub fn bind(doc: &mut Document, form_id: &str) -> Self {
        let form = doc.element_by_id(form_id);
        if form.is_none() {
            error!(form_id, "echo form not found; controller will be inert");
        }

        let controller = Self { form };
        if controller.form.is_some() {
            controller.echo_all(doc);
        }
        controller
    }

    /// Whether binding succeeded
    pub fn is_bound(&self) -> bool {
        self.form.is_some()
    }

    /// Handles one live input-change event
    ///
    /// The event target must be a recognized form control; anything else
    /// is logged and ignored. A valid source is validated and echoed
    /// against the current document state.
    pub fn echo(&self, doc: &mut Document, event: &InputEvent) -> EchoOutcome {
        if self.form.is_none() {
            return EchoOutcome::Skipped(SkipReason::Unbound);
        }
        let source = event.target;
        if doc.control(source).is_none() {
            warn!(?source, "input event target is not a form control");
            return EchoOutcome::Skipped(SkipReason::NotAControl);
        }

        let config = FieldConfig::from_element(doc, source);
        match validate(doc, source, &config, false) {
            Ok(()) => echo_element(doc, source, &config),
            Err(reason) => {
                trace!(?source, ?reason, "echo skipped");
                EchoOutcome::Skipped(reason)
            }
        }
    }

    /// Runs the full echo pass over the bound form's subtree
    ///
    /// Visits every form control carrying a target-id attribute in
    /// document order and evaluates each one independently; one field's
    /// failure never blocks the others.
    ///
    /// # Returns
    /// The per-field outcomes in visit order (empty when unbound)
    pub fn echo_all(&self, doc: &mut Document) -> Vec<(NodeId, EchoOutcome)> {
        let Some(form) = self.form else {
            return Vec::new();
        };

        let sources: Vec<NodeId> = doc
            .descendants(form)
            .filter(|&node| doc.control(node).is_some() && doc.has_attr(node, ATTR_TARGET))
            .collect();

        sources
            .into_iter()
            .map(|source| {
                let config = FieldConfig::from_element(doc, source);
                let outcome = match validate(doc, source, &config, true) {
                    Ok(()) => echo_element(doc, source, &config),
                    Err(reason) => {
                        trace!(?source, ?reason, "initial echo skipped");
                        EchoOutcome::Skipped(reason)
                    }
                };
                (source, outcome)
            })
            .collect()
    }
}

/// Gate before echoing; checks run in a fixed order so the reported reason
/// is deterministic
fn validate(
    doc: &Document,
    source: NodeId,
    config: &FieldConfig,
    echo_all: bool,
) -> Result<(), SkipReason> {
    // Extra rules for the initial full pass
    if echo_all {
        if config.autofill_disabled {
            return Err(SkipReason::AutofillSuppressed);
        }
        let Some(control) = doc.control(source) else {
            return Err(SkipReason::NotAControl);
        };
        if EchoValue::of(control).is_empty() {
            return Err(SkipReason::EmptyValue);
        }
    }

    if config.disabled {
        return Err(SkipReason::Disabled);
    }

    let Some(target_id) = &config.target else {
        warn!(?source, "echo source has no target-id attribute");
        return Err(SkipReason::MissingTarget);
    };
    if doc.element_by_id(target_id).is_none() {
        return Err(SkipReason::DanglingTarget);
    }

    if let WrapperSpec::Template(template_id) = &config.wrapper {
        if doc.element_by_id(template_id).is_none() {
            return Err(SkipReason::DanglingTemplate);
        }
    }

    Ok(())
}

/// Extracts the source's value, renders it per the wrapper policy, and
/// writes the result into the target element's content
///
/// Mutates only the target; the source field is never touched.
fn echo_element(doc: &mut Document, source: NodeId, config: &FieldConfig) -> EchoOutcome {
    let Some(control) = doc.control(source) else {
        return EchoOutcome::Skipped(SkipReason::NotAControl);
    };
    let value = EchoValue::of(control);

    let Some(target_id) = &config.target else {
        return EchoOutcome::Skipped(SkipReason::MissingTarget);
    };
    let Some(target) = doc.element_by_id(target_id) else {
        return EchoOutcome::Skipped(SkipReason::DanglingTarget);
    };

    let markup = match &config.wrapper {
        WrapperSpec::Template(template_id) => {
            let Some(template) = doc.element_by_id(template_id) else {
                return EchoOutcome::Skipped(SkipReason::DanglingTemplate);
            };
            match render::apply_template(doc, template, &value) {
                Some(markup) => markup,
                None => {
                    warn!(%template_id, "wrapper template has no element child");
                    return EchoOutcome::Skipped(SkipReason::EmptyTemplate);
                }
            }
        }
        WrapperSpec::Literal(wrapper) => render::apply_literal(wrapper, &value),
        WrapperSpec::None => value.to_string(),
    };

    // The id registry only indexes elements, so the write cannot fail here
    if doc.set_content(target, &markup).is_err() {
        return EchoOutcome::Skipped(SkipReason::DanglingTarget);
    }
    EchoOutcome::Echoed
}
