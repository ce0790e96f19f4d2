use crate::model::schema::TableSchema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Table-level portion of a feed definition: the schema detected on the
/// source table and the schema declared for the target table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_table_schema: Option<TableSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_table_schema: Option<TableSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_format: Option<String>,
}

/// A feed definition as assembled by the multi-step wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub system_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_owner: Option<String>,
    #[serde(default)]
    pub table: FeedTable,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub user_properties: IndexMap<String, String>,
}

impl Feed {
    pub fn new(system_name: impl Into<String>) -> Self {
        Self {
            system_name: system_name.into(),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_source_schema(mut self, schema: TableSchema) -> Self {
        self.table.source_table_schema = Some(schema);
        self
    }

    pub fn source_schema(&self) -> Option<&TableSchema> {
        self.table.source_table_schema.as_ref()
    }

    /// Number of fields on the detected source schema. A feed whose schema
    /// has not been detected yet counts as zero fields.
    pub fn source_field_count(&self) -> usize {
        self.source_schema()
            .map(TableSchema::field_count)
            .unwrap_or(0)
    }

    pub fn has_source_fields(&self) -> bool {
        self.source_field_count() > 0
    }

    pub fn set_user_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.user_properties.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::Feed;
    use crate::model::field::Field;
    use crate::model::schema::TableSchema;

    #[test]
    fn missing_source_schema_counts_as_zero_fields() {
        let feed = Feed::new("orders_feed");
        assert_eq!(feed.source_field_count(), 0);
        assert!(!feed.has_source_fields());
    }

    #[test]
    fn source_field_count_follows_detected_schema() {
        let feed = Feed::new("orders_feed")
            .with_source_schema(TableSchema::new("orders").with_field(Field::new("id", "bigint")));
        assert_eq!(feed.source_field_count(), 1);
        assert!(feed.has_source_fields());
    }

    #[test]
    fn user_properties_keep_insertion_order() {
        let mut feed = Feed::new("orders_feed");
        feed.set_user_property("owner", "ops");
        feed.set_user_property("tier", "gold");
        assert_eq!(
            feed.user_properties.keys().collect::<Vec<_>>(),
            vec!["owner", "tier"]
        );
    }
}
