pub type StepId = String;

/// One page of the feed-definition wizard.
///
/// `complete` gates whether the user may advance past the step; `valid`
/// records whether its validation passed. Step validators always move the
/// two flags together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub title: String,
    pub description: Option<String>,
    pub complete: bool,
    pub valid: bool,
    pub visited: bool,
}

impl Step {
    pub fn new(id: impl Into<StepId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            complete: false,
            valid: false,
            visited: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_complete(&mut self, complete: bool) {
        self.complete = complete;
    }
}
