//! Application orchestration layer
//!
//! This module coordinates between the input, domain, config, render, and
//! document layers: the controller itself and the tagged outcome every
//! echo attempt resolves to.

pub mod controller;
pub mod outcome;

pub use controller::EchoController;
pub use outcome::{EchoOutcome, SkipReason};
