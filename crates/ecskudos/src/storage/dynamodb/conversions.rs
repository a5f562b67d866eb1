//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and kudos.
//! These are testable in isolation without DynamoDB access.
//!
//! The attribute names match the items the service has always written, so
//! existing tables stay readable.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use ecskudos_core::kudos::{ContributionType, Kudo};
use ecskudos_core::storage::attributes::{
    CONTRIBUTION_NAME, CONTRIBUTION_TYPE, CONTRIBUTION_URL, TIME, USER,
};
use ecskudos_core::storage::StoreError;

// ============================================================================
// Kudo conversions
// ============================================================================

/// Convert a Kudo to a DynamoDB item.
///
/// Fails when the partition key is empty, which DynamoDB would reject anyway.
pub fn kudo_to_item(kudo: &Kudo) -> Result<HashMap<String, AttributeValue>, StoreError> {
    if kudo.user.is_empty() {
        return Err(StoreError::Serialization(format!(
            "partition key {USER} must not be empty"
        )));
    }

    let mut item = HashMap::new();

    // Key
    item.insert(USER.to_string(), AttributeValue::S(kudo.user.clone()));

    // Data
    item.insert(
        TIME.to_string(),
        AttributeValue::N(kudo.time.timestamp().to_string()),
    );
    item.insert(
        CONTRIBUTION_TYPE.to_string(),
        AttributeValue::S(kudo.contribution_type.as_str().to_string()),
    );
    item.insert(
        CONTRIBUTION_URL.to_string(),
        AttributeValue::S(kudo.contribution_url.clone()),
    );
    item.insert(
        CONTRIBUTION_NAME.to_string(),
        AttributeValue::S(kudo.contribution_name.clone()),
    );

    Ok(item)
}

/// Convert a DynamoDB item to a Kudo.
pub fn item_to_kudo(item: &HashMap<String, AttributeValue>) -> Result<Kudo, StoreError> {
    let contribution_type = get_string(item, CONTRIBUTION_TYPE)?
        .parse::<ContributionType>()
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

    Ok(Kudo {
        user: get_string(item, USER)?,
        time: get_epoch_seconds(item, TIME)?,
        contribution_type,
        contribution_url: get_string(item, CONTRIBUTION_URL)?,
        contribution_name: get_string(item, CONTRIBUTION_NAME)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::Serialization(format!("Missing or invalid field: {key}")))
}

/// Get a required timestamp stored as a number of epoch seconds.
fn get_epoch_seconds(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, StoreError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| StoreError::Serialization(format!("Missing or invalid field: {key}")))?;

    let secs: i64 = raw
        .parse()
        .map_err(|e| StoreError::Serialization(format!("Invalid number {key}: {e}")))?;

    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| StoreError::InvalidData(format!("{key} out of range: {secs}")))
}
