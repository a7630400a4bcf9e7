//! Live form-value echoing
//!
//! Binds form input changes to echo displays elsewhere in a document: as
//! the host reports edits to a form control, a designated element's
//! content is updated with the control's current value, optionally wrapped
//! in a template. Behavior is driven entirely by `data-echo-*` attributes
//! on the source controls.
//!
//! The crate carries its own in-memory document model ([`dom`]), so the
//! controller resolves ids through an explicit document handle and the
//! whole behavior is testable without a live UI environment.
//!
//! ```rust
//! use form_echo::{Document, EchoController, ElementInit, InputEvent};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let form = doc.append_element(root, ElementInit::form("signup"))?;
//! let name = doc.append_element(
//!     form,
//!     ElementInit::text_input("").attr("data-echo-target", "greeting"),
//! )?;
//! doc.append_element(root, ElementInit::new("span").id("greeting"))?;
//!
//! let controller = EchoController::bind(&mut doc, "signup");
//!
//! doc.set_value(name, "Alice")?;
//! controller.echo(&mut doc, &InputEvent::new(name));
//!
//! let greeting = doc.element_by_id("greeting").unwrap();
//! assert_eq!(doc.content(greeting), "Alice");
//! # Ok::<(), form_echo::DocumentError>(())
//! ```

pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod input;
pub mod render;

pub use app::{EchoController, EchoOutcome, SkipReason};
pub use config::{FieldConfig, WrapperSpec};
pub use dom::{ControlState, Document, DocumentError, ElementInit, NodeId, SelectOption};
pub use domain::{ControlKind, EchoValue};
pub use input::InputEvent;
