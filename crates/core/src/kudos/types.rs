use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::KudoError;

/// The kind of contribution a kudo records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContributionType {
    PullRequest,
    Issue,
}

impl ContributionType {
    /// Returns the tag stored in the `ContributionType` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionType::PullRequest => "PullRequest",
            ContributionType::Issue => "Issue",
        }
    }
}

impl fmt::Display for ContributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContributionType {
    type Err = KudoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PullRequest" => Ok(ContributionType::PullRequest),
            "Issue" => Ok(ContributionType::Issue),
            other => Err(KudoError::UnknownContributionType(other.to_string())),
        }
    }
}

/// A recorded contribution: a user opened a pull request or an issue.
///
/// Kudos are immutable once written. Several kudos may share the same
/// `user`, which is the partition key of the backing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kudo {
    pub user: String,
    /// Creation time reported by GitHub, serialized as epoch seconds.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    pub contribution_type: ContributionType,
    pub contribution_url: String,
    pub contribution_name: String,
}

impl Kudo {
    /// Creates a new kudo.
    pub fn new(
        user: impl Into<String>,
        time: DateTime<Utc>,
        contribution_type: ContributionType,
        contribution_url: impl Into<String>,
        contribution_name: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            time,
            contribution_type,
            contribution_url: contribution_url.into(),
            contribution_name: contribution_name.into(),
        }
    }

    /// Creates a pull request kudo.
    pub fn pull_request(
        user: impl Into<String>,
        time: DateTime<Utc>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self::new(user, time, ContributionType::PullRequest, url, title)
    }

    /// Creates an issue kudo.
    pub fn issue(
        user: impl Into<String>,
        time: DateTime<Utc>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self::new(user, time, ContributionType::Issue, url, title)
    }
}
