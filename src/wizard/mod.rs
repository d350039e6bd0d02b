//! Event creation wizard: a data-entry step followed by a confirmation step.
//!
//! [`WizardFlow`] owns the draft and is its only writer. The data-entry step
//! ([`DetailsStep`]) keeps the typed text and turns each [`FieldEdit`] into a
//! [`DraftUpdate`](crate::model::DraftUpdate) that the flow merges.

mod details;
mod flow;

pub use details::{DetailsStep, FieldEdit, TextIssue};
pub use flow::{FlowError, FlowOutcome, Step, WizardFlow};
