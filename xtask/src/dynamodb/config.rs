//! Table configuration types (Functional Core - pure data).

use ecskudos_core::storage::table_name;

/// Environment the default table name is scoped to.
pub const DEFAULT_ENVIRONMENT: &str = "test";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Default table name, `ecskudos-test-kudos`.
pub fn default_table_name() -> String {
    table_name(DEFAULT_ENVIRONMENT)
}

/// Returns the canonical table configuration for the kudos table.
///
/// One partition key, `User`, and nothing else: kudos are only ever read
/// back by user.
pub fn kudos_table_config() -> TableConfig {
    TableConfig {
        table_name: default_table_name(),
        partition_key: KeyAttribute {
            name: "User".to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kudos_table_config() {
        let config = kudos_table_config();

        assert_eq!(config.table_name, "ecskudos-test-kudos");
        assert_eq!(config.partition_key.name, "User");
        assert_eq!(config.partition_key.attribute_type, AttributeType::String);
        assert_eq!(config.billing_mode, BillingMode::PayPerRequest);
    }

    #[test]
    fn test_with_table_name() {
        let config = kudos_table_config().with_table_name("ecskudos-prod-kudos");
        assert_eq!(config.table_name, "ecskudos-prod-kudos");
        assert_eq!(config.partition_key.name, "User");
    }
}
