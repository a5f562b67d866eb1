use std::env;

use ecskudos_core::storage::table_name;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret used to verify webhook signatures. Empty disables verification.
    pub webhook_secret: String,
    /// Deployment environment the table name is scoped to (default: "test")
    pub environment: String,
    /// DynamoDB table holding the kudos (default: "ecskudos-<environment>-kudos")
    pub table_name: String,
    /// Custom DynamoDB endpoint, for a local DynamoDB.
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WEBHOOK_SECRET` - Webhook shared secret (legacy name: `WEBHOOK-SECRET`)
    /// - `KUDOS_ENVIRONMENT` - Deployment environment (default: "test")
    /// - `DYNAMODB_TABLE_NAME` - Overrides the derived table name
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint
    ///
    /// AWS credentials and region are resolved by the AWS SDK default chain.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("KUDOS_ENVIRONMENT")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "test".to_string());

        Self {
            webhook_secret: lookup("WEBHOOK_SECRET")
                .or_else(|| lookup("WEBHOOK-SECRET"))
                .unwrap_or_default(),
            table_name: lookup("DYNAMODB_TABLE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| table_name(&environment)),
            environment,
            aws_endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|v| !v.is_empty()),
        }
    }
}
