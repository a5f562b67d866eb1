//! Typed GitHub webhook payloads.
//!
//! Only the fields ecskudos reads are modelled. Every field is optional and
//! the accessors fall back to empty values, so a sparse payload still
//! decodes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::serde::deserialize_optional_timestamp;

/// A GitHub account (user or bot).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub login: Option<String>,
}

/// The `pull_request` object of a pull request event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub user: Option<Account>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// API URL of the pull request.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// The `issue` object of an issues event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub user: Option<Account>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// API URL of the issue.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Payload of a `pull_request` webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

/// Payload of an `issues` webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssuesEvent {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub issue: Option<Issue>,
}

/// A parsed webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
    PullRequest(PullRequestEvent),
    Issues(IssuesEvent),
    /// Any other event kind. The payload was valid JSON but is not modelled.
    Other { kind: String },
}

impl WebhookEvent {
    /// Returns the `X-GitHub-Event` name this event was parsed from.
    pub fn kind(&self) -> &str {
        match self {
            WebhookEvent::PullRequest(_) => "pull_request",
            WebhookEvent::Issues(_) => "issues",
            WebhookEvent::Other { kind } => kind,
        }
    }
}

fn login(account: Option<&Account>) -> &str {
    account.and_then(|a| a.login.as_deref()).unwrap_or_default()
}

impl PullRequestEvent {
    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or_default()
    }

    /// The pull request object, or an empty one when the payload has none.
    pub fn pull_request(&self) -> PullRequest {
        self.pull_request.clone().unwrap_or_default()
    }
}

impl IssuesEvent {
    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or_default()
    }

    /// The issue object, or an empty one when the payload has none.
    pub fn issue(&self) -> Issue {
        self.issue.clone().unwrap_or_default()
    }
}

impl PullRequest {
    pub fn author_login(&self) -> &str {
        login(self.user.as_ref())
    }

    /// Creation time, or the Unix epoch when GitHub did not report one.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

impl Issue {
    pub fn author_login(&self) -> &str {
        login(self.user.as_ref())
    }

    /// Creation time, or the Unix epoch when GitHub did not report one.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}
