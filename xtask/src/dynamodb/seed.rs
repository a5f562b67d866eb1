//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use chrono::{DateTime, Duration, Utc};
use ecskudos_core::kudos::{ContributionType, Kudo};
use ecskudos_core::storage::attributes::{
    CONTRIBUTION_NAME, CONTRIBUTION_TYPE, CONTRIBUTION_URL, TIME, USER,
};
use std::collections::HashMap;

/// BatchWriteItem accepts at most 25 requests.
const BATCH_SIZE: usize = 25;

/// Upper bound for `--count`, one kudo per day keeps well inside chrono's range.
pub const MAX_SEED_COUNT: u32 = 1000;

const REPOSITORY: &str = "https://api.github.com/repos/ecskudos/sandbox";

const PULL_REQUEST_TITLES: [&str; 5] = [
    "Fix flaky integration test",
    "Add retry to the deploy script",
    "Bump aws-sdk-dynamodb",
    "Document the webhook setup",
    "Handle empty payloads",
];

const ISSUE_TITLES: [&str; 5] = [
    "Service crashes on startup",
    "Kudos list is empty after redeploy",
    "Support GitLab webhooks",
    "Typo in README",
    "Timeouts under load",
];

/// Login of the `i`-th seeded kudo: `user`, then `user-2`, `user-3`, ...
///
/// Every kudo needs its own login: the table holds one item per `User` and
/// BatchWriteItem rejects a batch with repeated keys.
pub fn seed_login(user: &str, i: u32) -> String {
    if i == 0 {
        user.to_string()
    } else {
        format!("{}-{}", user, i + 1)
    }
}

/// Generate `count` sample kudos starting at `user`, one per day going back
/// from `now`. `count` is capped at [`MAX_SEED_COUNT`].
///
/// Pull requests and issues alternate so both contribution types show up.
pub fn generate_seed_kudos(user: &str, now: DateTime<Utc>, count: u32) -> Vec<Kudo> {
    (0..count.min(MAX_SEED_COUNT))
        .map(|i| {
            let time = now - Duration::days(i as i64);
            let login = seed_login(user, i);
            let number = i + 1;
            let idx = i as usize;
            if i % 2 == 0 {
                Kudo::pull_request(
                    login,
                    time,
                    format!("{}/pulls/{}", REPOSITORY, number),
                    PULL_REQUEST_TITLES[idx / 2 % PULL_REQUEST_TITLES.len()],
                )
            } else {
                Kudo::issue(
                    login,
                    time,
                    format!("{}/issues/{}", REPOSITORY, number),
                    ISSUE_TITLES[idx / 2 % ISSUE_TITLES.len()],
                )
            }
        })
        .collect()
}

/// Same attribute layout the server writes.
fn kudo_to_item(kudo: &Kudo) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (USER.to_string(), AttributeValue::S(kudo.user.clone())),
        (
            TIME.to_string(),
            AttributeValue::N(kudo.time.timestamp().to_string()),
        ),
        (
            CONTRIBUTION_TYPE.to_string(),
            AttributeValue::S(kudo.contribution_type.to_string()),
        ),
        (
            CONTRIBUTION_URL.to_string(),
            AttributeValue::S(kudo.contribution_url.clone()),
        ),
        (
            CONTRIBUTION_NAME.to_string(),
            AttributeValue::S(kudo.contribution_name.clone()),
        ),
    ])
}

/// Insert kudos with BatchWriteItem. Returns the number inserted.
pub async fn seed_kudos(client: &Client, table_name: &str, kudos: &[Kudo]) -> Result<u32> {
    let mut inserted = 0;

    for chunk in kudos.chunks(BATCH_SIZE) {
        let write_requests = chunk
            .iter()
            .map(|kudo| {
                PutRequest::builder()
                    .set_item(Some(kudo_to_item(kudo)))
                    .build()
                    .map(|put| WriteRequest::builder().put_request(put).build())
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        inserted += chunk.len() as u32;
    }

    Ok(inserted)
}

/// Short label for display.
pub fn format_contribution_type(contribution_type: ContributionType) -> &'static str {
    match contribution_type {
        ContributionType::PullRequest => "PR",
        ContributionType::Issue => "Issue",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_generate_count_and_logins() {
        let kudos = generate_seed_kudos("alice", now(), 3);

        let users: Vec<_> = kudos.iter().map(|k| k.user.as_str()).collect();
        assert_eq!(users, vec!["alice", "alice-2", "alice-3"]);
    }

    #[test]
    fn test_no_batch_repeats_a_user() {
        let kudos = generate_seed_kudos("alice", now(), 60);
        assert_eq!(kudos.len(), 60);

        for chunk in kudos.chunks(BATCH_SIZE) {
            let users: HashSet<_> = chunk.iter().map(|k| k.user.as_str()).collect();
            assert_eq!(users.len(), chunk.len());
        }
    }

    #[test]
    fn test_generate_is_capped() {
        let kudos = generate_seed_kudos("alice", now(), u32::MAX);
        assert_eq!(kudos.len(), MAX_SEED_COUNT as usize);
    }

    #[test]
    fn test_generate_alternates_types() {
        let kudos = generate_seed_kudos("alice", now(), 4);

        let types: Vec<_> = kudos.iter().map(|k| k.contribution_type).collect();
        assert_eq!(
            types,
            vec![
                ContributionType::PullRequest,
                ContributionType::Issue,
                ContributionType::PullRequest,
                ContributionType::Issue,
            ]
        );
        assert!(kudos[0].contribution_url.ends_with("/pulls/1"));
        assert!(kudos[1].contribution_url.ends_with("/issues/2"));
    }

    #[test]
    fn test_generate_one_per_day() {
        let kudos = generate_seed_kudos("alice", now(), 3);

        assert_eq!(kudos[0].time, now());
        assert_eq!(kudos[2].time, now() - Duration::days(2));
    }

    #[test]
    fn test_generate_zero() {
        assert!(generate_seed_kudos("alice", now(), 0).is_empty());
    }

    #[test]
    fn test_item_layout() {
        let kudo = Kudo::issue("alice", now(), "https://x/issues/1", "Bug");
        let item = kudo_to_item(&kudo);

        assert_eq!(item.len(), 5);
        assert_eq!(item.get(USER), Some(&AttributeValue::S("alice".into())));
        assert_eq!(
            item.get(TIME),
            Some(&AttributeValue::N("1700000000".into()))
        );
        assert_eq!(
            item.get(CONTRIBUTION_TYPE),
            Some(&AttributeValue::S("Issue".into()))
        );
    }
}
