//! Translation of webhook events into kudos.

use crate::webhook::WebhookEvent;

use super::Kudo;

/// The only webhook action that earns a kudo.
pub const OPENED_ACTION: &str = "opened";

/// Outcome of translating a webhook event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// The event qualifies and should be stored.
    Record(Kudo),
    /// A supported event whose action is not `opened`.
    Skip { action: String },
    /// An event kind ecskudos does not track.
    Ignore { kind: String },
}

/// Maps a webhook event to the kudo it earns, if any.
///
/// No validation happens here: empty titles, URLs or logins are carried
/// through as-is.
pub fn translate_event(event: &WebhookEvent) -> Translation {
    match event {
        WebhookEvent::PullRequest(e) if e.action() == OPENED_ACTION => {
            let pr = e.pull_request();
            Translation::Record(Kudo::pull_request(
                pr.author_login(),
                pr.created_at(),
                pr.url(),
                pr.title(),
            ))
        }
        WebhookEvent::Issues(e) if e.action() == OPENED_ACTION => {
            let issue = e.issue();
            Translation::Record(Kudo::issue(
                issue.author_login(),
                issue.created_at(),
                issue.url(),
                issue.title(),
            ))
        }
        WebhookEvent::PullRequest(e) => Translation::Skip {
            action: e.action().to_string(),
        },
        WebhookEvent::Issues(e) => Translation::Skip {
            action: e.action().to_string(),
        },
        WebhookEvent::Other { kind } => Translation::Ignore { kind: kind.clone() },
    }
}
