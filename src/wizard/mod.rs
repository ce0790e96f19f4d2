pub mod flow;
pub mod step;

use crate::model::Feed;
use crate::validate::{BoxedStepValidator, StepValidator};
use crate::wizard::flow::Flow;
use crate::wizard::step::{Step, StepId};
use indexmap::IndexMap;

/// Drives a feed definition through its wizard steps: runs the validator
/// registered for the current step against the feed and advances the flow
/// once the step is complete.
pub struct Wizard {
    feed: Feed,
    flow: Flow,
    validators: IndexMap<StepId, BoxedStepValidator>,
}

impl Wizard {
    pub fn new(feed: Feed, steps: Vec<Step>) -> Self {
        Self {
            feed,
            flow: Flow::new(steps),
            validators: IndexMap::new(),
        }
    }

    pub fn with_validator(
        mut self,
        step_id: impl Into<StepId>,
        validator: impl StepValidator + Send + Sync + 'static,
    ) -> Self {
        self.validators.insert(step_id.into(), Box::new(validator));
        self
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut Feed {
        &mut self.feed
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn current_step(&self) -> &Step {
        self.flow.current_step()
    }

    /// Re-run the current step's validator against the feed. Steps without
    /// a registered validator have no data requirement and pass outright.
    pub fn validate_current(&mut self) -> bool {
        let step = self.flow.current_step_mut();
        let complete = match self.validators.get(step.id.as_str()) {
            Some(validator) => validator.validate(&self.feed, step),
            None => {
                step.set_complete(true);
                step.valid = true;
                true
            }
        };
        tracing::debug!(step = %step.id, complete, "step validated");
        complete
    }

    /// Validate the current step and advance past it on success. Returns
    /// whether the step was accepted; on the last step acceptance finishes
    /// the wizard without moving the cursor.
    pub fn submit(&mut self) -> bool {
        if !self.validate_current() {
            tracing::debug!(step = %self.current_step().id, "submit refused, step incomplete");
            return false;
        }
        if self.flow.advance() {
            tracing::debug!(step = %self.current_step().id, "advanced to step");
        }
        true
    }

    pub fn back(&mut self) -> bool {
        self.flow.back()
    }

    pub fn is_finished(&self) -> bool {
        self.flow.is_complete()
    }
}
