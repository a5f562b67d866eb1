//! DynamoDB repository implementation.
//!
//! Implements [`KudoRepository`] against a single table whose partition key
//! is the `User` attribute.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use ecskudos_core::kudos::Kudo;
use ecskudos_core::storage::attributes::USER;
use ecskudos_core::storage::{KudoRepository, Result};

use super::conversions::{item_to_kudo, kudo_to_item};
use super::error::map_sdk_error;
use crate::config::Config;

/// DynamoDB-based kudo repository.
///
/// The SDK client is cheap to clone and safe to share, so one repository is
/// built at startup and shared by every request.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from the application configuration.
    ///
    /// Credentials and region come from the AWS SDK default chain (environment,
    /// shared config files, or instance role). `AWS_ENDPOINT_URL` points the
    /// client at a local DynamoDB.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), &config.table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl KudoRepository for DynamoDbRepository {
    async fn create_kudo(&self, kudo: &Kudo) -> Result<()> {
        let item = kudo_to_item(kudo)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn list_kudos_by_user(&self, user: &str) -> Result<Vec<Kudo>> {
        let mut kudos = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            // `User` is a DynamoDB reserved word, hence the name placeholder.
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#user = :user")
                .expression_attribute_names("#user", USER)
                .expression_attribute_values(":user", AttributeValue::S(user.to_string()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_sdk_error)?;

            let next_key = result.last_evaluated_key;
            for item in result.items.unwrap_or_default() {
                kudos.push(item_to_kudo(&item)?);
            }

            match next_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(
            table = %self.table_name,
            %user,
            count = kudos.len(),
            "Queried kudos"
        );

        Ok(kudos)
    }
}
