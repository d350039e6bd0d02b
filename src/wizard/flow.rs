//! The flow container: step navigation and the single writer of the draft.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{Currency, EventDraft, EventSummary, ValidationError};

use super::details::{DetailsStep, FieldEdit};

/// A step of the creation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Data entry for every draft field.
    Details,
    /// Read-only review before creating the event.
    Confirm,
}

static ALL_STEPS: &[Step] = &[Step::Details, Step::Confirm];

impl Step {
    /// 1-based position of this step.
    pub fn number(self) -> usize {
        match self {
            Self::Details => 1,
            Self::Confirm => 2,
        }
    }

    pub fn all() -> &'static [Step] {
        ALL_STEPS
    }
}

/// Result of a successful transition.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    /// Nothing changed.
    Stay,
    /// The flow moved to the given step.
    Moved(Step),
    /// The user backed out of the first step. No draft is handed over.
    Cancelled,
    /// The finished draft, emitted once.
    Created(EventDraft),
}

/// Why a transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("event details are incomplete ({} problem(s))", .0.len())]
    Incomplete(Vec<ValidationError>),
    #[error("events can only be created from the confirmation step")]
    NotOnConfirmation,
    #[error("the confirmation step cannot edit the draft")]
    ReadOnlyStep,
    #[error("the wizard has already finished")]
    Finished,
}

/// Drives a two-step event creation wizard.
#[derive(Debug, Clone)]
pub struct WizardFlow {
    step: Step,
    draft: EventDraft,
    details: DetailsStep,
    finished: bool,
}

impl WizardFlow {
    /// Starts on the first step with an empty draft budgeted in `currency`.
    pub fn new(currency: Currency) -> Self {
        let draft = EventDraft::new(currency);
        let details = DetailsStep::from_draft(&draft);
        Self {
            step: Step::Details,
            draft,
            details,
            finished: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn step_number(&self) -> usize {
        self.step.number()
    }

    pub fn total_steps(&self) -> usize {
        Step::all().len()
    }

    /// Current draft snapshot.
    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn details(&self) -> &DetailsStep {
        &self.details
    }

    /// Display strings for the confirmation step.
    pub fn summary(&self) -> EventSummary {
        EventSummary::of(&self.draft)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether [`advance`](Self::advance) would currently succeed.
    pub fn can_advance(&self) -> bool {
        !self.finished && (self.step != Step::Details || self.details.can_proceed())
    }

    /// Applies a field edit on the data-entry step and merges the resulting
    /// update into the draft.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<(), FlowError> {
        self.ensure_running()?;
        if self.step != Step::Details {
            return Err(FlowError::ReadOnlyStep);
        }
        let update = self.details.apply(edit);
        self.draft.merge(update);
        Ok(())
    }

    /// Moves to the next step if the current one is satisfied. A no-op on the
    /// last step.
    pub fn advance(&mut self) -> Result<FlowOutcome, FlowError> {
        self.ensure_running()?;
        match self.step {
            Step::Details => {
                let problems = self.details.problems();
                if !problems.is_empty() {
                    warn!(?problems, "advance blocked");
                    return Err(FlowError::Incomplete(problems));
                }
                self.step = Step::Confirm;
                debug!(step = ?self.step, "advanced");
                Ok(FlowOutcome::Moved(self.step))
            }
            Step::Confirm => Ok(FlowOutcome::Stay),
        }
    }

    /// Moves to the previous step, or cancels the flow from the first step.
    pub fn retreat(&mut self) -> Result<FlowOutcome, FlowError> {
        self.ensure_running()?;
        match self.step {
            Step::Details => {
                self.finished = true;
                info!("event creation cancelled");
                Ok(FlowOutcome::Cancelled)
            }
            Step::Confirm => {
                self.step = Step::Details;
                debug!(step = ?self.step, "retreated");
                Ok(FlowOutcome::Moved(self.step))
            }
        }
    }

    /// Hands over the finished draft. Succeeds at most once.
    pub fn complete(&mut self) -> Result<FlowOutcome, FlowError> {
        self.ensure_running()?;
        if self.step != Step::Confirm {
            return Err(FlowError::NotOnConfirmation);
        }
        let problems = self.draft.problems();
        if !problems.is_empty() {
            return Err(FlowError::Incomplete(problems));
        }
        self.finished = true;
        info!(name = %self.draft.name, category = ?self.draft.category, "event created");
        Ok(FlowOutcome::Created(self.draft.clone()))
    }

    fn ensure_running(&self) -> Result<(), FlowError> {
        if self.finished {
            Err(FlowError::Finished)
        } else {
            Ok(())
        }
    }
}
