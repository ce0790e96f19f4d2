use crate::wizard::step::Step;

/// Ordered wizard steps with a cursor. Advancing is gated on the current
/// step's `complete` flag; moving backwards is always allowed.
pub struct Flow {
    steps: Vec<Step>,
    current: usize,
}

impl Flow {
    pub fn new(mut steps: Vec<Step>) -> Self {
        if let Some(first) = steps.first_mut() {
            first.visited = true;
        }
        Self { steps, current: 0 }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut [Step] {
        &mut self.steps
    }

    pub fn step_at(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn current_step_mut(&mut self) -> &mut Step {
        &mut self.steps[self.current]
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.steps.len()
    }

    /// Move to the next step. Refused when the current step is incomplete
    /// or already last.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() || !self.current_step().complete {
            return false;
        }
        self.current += 1;
        self.steps[self.current].visited = true;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump directly to a step the user has already visited.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let Some(step) = self.steps.get(index) else {
            return false;
        };
        if !step.visited {
            return false;
        }
        self.current = index;
        true
    }

    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|step| step.complete)
    }
}
