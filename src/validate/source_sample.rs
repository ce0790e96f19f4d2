use crate::model::Feed;
use crate::validate::{StepValidator, field_policy};
use crate::wizard::step::Step;

/// Marks the source-sample step complete once the detected source table
/// schema carries at least one field. A feed whose schema has not been
/// detected yet is treated the same as an empty one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceSampleValidator;

impl StepValidator for SourceSampleValidator {
    fn validate(&self, feed: &Feed, step: &mut Step) -> bool {
        if feed.source_field_count() == 0 {
            step.set_complete(false);
            step.valid = false;
        } else {
            step.set_complete(true);
            step.valid = true;
        }

        // Completeness is cardinality-only; name problems are reported but
        // do not hold the step back.
        if let Some(schema) = feed.source_schema() {
            let invalid = field_policy::invalid_field_names(schema);
            if !invalid.is_empty() {
                tracing::debug!(
                    schema = %schema.name,
                    fields = ?invalid,
                    "source schema contains invalid field names"
                );
            }
        }

        step.complete
    }
}

#[cfg(test)]
mod tests {
    use super::SourceSampleValidator;
    use crate::model::{Feed, Field, TableSchema};
    use crate::validate::StepValidator;
    use crate::wizard::step::Step;

    fn feed_with_fields(names: &[&str]) -> Feed {
        let mut schema = TableSchema::new("sample");
        for name in names {
            schema.push_field(Field::new(*name, "string"));
        }
        Feed::new("sample_feed").with_source_schema(schema)
    }

    #[test]
    fn empty_schema_leaves_step_incomplete_and_invalid() {
        let mut step = Step::new("source-sample", "Source Sample");
        let passed = SourceSampleValidator.validate(&feed_with_fields(&[]), &mut step);
        assert!(!passed);
        assert!(!step.complete);
        assert!(!step.valid);
    }

    #[test]
    fn single_field_completes_the_step() {
        let mut step = Step::new("source-sample", "Source Sample");
        let passed = SourceSampleValidator.validate(&feed_with_fields(&["a"]), &mut step);
        assert!(passed);
        assert!(step.complete);
        assert!(step.valid);
    }

    #[test]
    fn several_fields_complete_the_step() {
        let mut step = Step::new("source-sample", "Source Sample");
        let passed = SourceSampleValidator.validate(&feed_with_fields(&["a", "b", "c"]), &mut step);
        assert!(passed);
        assert!(step.complete);
        assert!(step.valid);
    }

    #[test]
    fn missing_schema_behaves_like_an_empty_one() {
        let mut step = Step::new("source-sample", "Source Sample");
        let passed = SourceSampleValidator.validate(&Feed::new("sample_feed"), &mut step);
        assert!(!passed);
        assert!(!step.complete);
        assert!(!step.valid);
    }

    #[test]
    fn flags_always_move_together() {
        let mut step = Step::new("source-sample", "Source Sample");
        for feed in [
            feed_with_fields(&[]),
            feed_with_fields(&["a"]),
            Feed::new("sample_feed"),
        ] {
            SourceSampleValidator.validate(&feed, &mut step);
            assert_eq!(step.complete, step.valid);
        }
    }

    #[test]
    fn revalidation_is_idempotent() {
        let mut step = Step::new("source-sample", "Source Sample");
        let feed = feed_with_fields(&["a", "b"]);
        let first = SourceSampleValidator.validate(&feed, &mut step);
        let second = SourceSampleValidator.validate(&feed, &mut step);
        assert_eq!(first, second);
        assert!(step.complete);
        assert!(step.valid);
    }

    #[test]
    fn flags_are_overwritten_when_the_schema_changes() {
        let mut step = Step::new("source-sample", "Source Sample");
        assert!(!SourceSampleValidator.validate(&feed_with_fields(&[]), &mut step));
        assert!(SourceSampleValidator.validate(&feed_with_fields(&["a"]), &mut step));
        assert!(step.complete);
        assert!(step.valid);

        assert!(!SourceSampleValidator.validate(&feed_with_fields(&[]), &mut step));
        assert!(!step.complete);
        assert!(!step.valid);
    }
}
