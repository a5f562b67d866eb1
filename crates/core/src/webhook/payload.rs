//! Payload extraction and event parsing.

use std::borrow::Cow;

use super::{WebhookError, WebhookEvent};

const JSON_MEDIA_TYPE: &str = "application/json";
const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";
const FORM_PAYLOAD_FIELD: &str = "payload";

/// Extracts the JSON document from a webhook body.
///
/// GitHub delivers either a raw JSON body or a form-encoded body whose
/// `payload` field holds the JSON document. Media type parameters such as
/// `charset` are ignored.
pub fn extract_payload<'a>(
    content_type: Option<&str>,
    body: &'a [u8],
) -> Result<Cow<'a, [u8]>, WebhookError> {
    let media_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .unwrap_or_default();

    match media_type.as_str() {
        JSON_MEDIA_TYPE => Ok(Cow::Borrowed(body)),
        FORM_MEDIA_TYPE => url::form_urlencoded::parse(body)
            .find(|(key, _)| key == FORM_PAYLOAD_FIELD)
            .map(|(_, value)| Cow::Owned(value.into_owned().into_bytes()))
            .ok_or(WebhookError::MissingPayload),
        _ => Err(WebhookError::UnsupportedContentType(
            content_type.unwrap_or_default().to_string(),
        )),
    }
}

/// Parses a webhook payload according to its `X-GitHub-Event` name.
///
/// `pull_request` and `issues` payloads are decoded into typed events. Any
/// other event kind must still be a valid JSON document and is returned as
/// [`WebhookEvent::Other`].
pub fn parse_event(event_type: Option<&str>, payload: &[u8]) -> Result<WebhookEvent, WebhookError> {
    let event_type = event_type
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(WebhookError::MissingEventType)?;

    let malformed = |e: serde_json::Error| WebhookError::MalformedPayload(e.to_string());

    match event_type {
        "pull_request" => serde_json::from_slice(payload)
            .map(WebhookEvent::PullRequest)
            .map_err(malformed),
        "issues" => serde_json::from_slice(payload)
            .map(WebhookEvent::Issues)
            .map_err(malformed),
        other => {
            serde_json::from_slice::<serde_json::Value>(payload).map_err(malformed)?;
            Ok(WebhookEvent::Other {
                kind: other.to_string(),
            })
        }
    }
}
