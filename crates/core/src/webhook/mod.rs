//! GitHub webhook intake: signature verification and payload parsing.
//!
//! The functions here are pure. The server feeds them the raw request
//! headers and body and maps the resulting [`WebhookError`] to a status code
//! with [`webhook_error_to_status_code`].

mod error;
mod events;
mod http_mapping;
mod payload;
mod signature;

pub use error::WebhookError;
pub use events::{Account, Issue, IssuesEvent, PullRequest, PullRequestEvent, WebhookEvent};
pub use http_mapping::webhook_error_to_status_code;
pub use payload::{extract_payload, parse_event};
pub use signature::{sign_payload, verify_signature};

/// Header carrying the HMAC-SHA256 signature of the request body.
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

/// Header naming the webhook event kind (`pull_request`, `issues`, ...).
pub const EVENT_HEADER: &str = "x-github-event";

/// Header carrying the unique delivery id GitHub assigns to each webhook.
pub const DELIVERY_HEADER: &str = "x-github-delivery";
