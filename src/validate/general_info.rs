use crate::model::Feed;
use crate::validate::StepValidator;
use crate::wizard::step::Step;

/// Completes the naming step once the feed carries a display name and a
/// category.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneralInfoValidator;

impl StepValidator for GeneralInfoValidator {
    fn validate(&self, feed: &Feed, step: &mut Step) -> bool {
        let named = !feed.display_name.trim().is_empty() && !feed.category.trim().is_empty();
        step.set_complete(named);
        step.valid = named;
        step.complete
    }
}
