use crate::model::TableSchema;
use regex::Regex;
use std::sync::OnceLock;

/// Field names must start with a letter or underscore and may contain
/// letters, digits, underscores and spaces.
const FIELD_NAME_PATTERN: &str = r"^[a-zA-Z_][a-zA-Z0-9_ ]*$";

fn field_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FIELD_NAME_PATTERN).expect("Invalid regex pattern"))
}

pub fn is_valid_field_name(name: &str) -> bool {
    field_name_regex().is_match(name)
}

/// Names on the schema that break the field-name policy, in declaration
/// order.
pub fn invalid_field_names(schema: &TableSchema) -> Vec<String> {
    schema
        .field_names()
        .filter(|name| !is_valid_field_name(name))
        .map(ToOwned::to_owned)
        .collect()
}
