use thiserror::Error;

/// Errors raised while authenticating or parsing a webhook delivery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    #[error("missing signature header X-Hub-Signature-256")]
    MissingSignature,
    #[error("invalid signature format: {0}")]
    InvalidSignatureFormat(String),
    #[error("payload signature check failed")]
    SignatureMismatch,
    #[error("invalid webhook secret")]
    InvalidSecret,
    #[error("missing X-GitHub-Event header")]
    MissingEventType,
    #[error("webhook request has unsupported Content-Type {0:?}")]
    UnsupportedContentType(String),
    #[error("form-encoded webhook request has no payload field")]
    MissingPayload,
    #[error("could not parse webhook payload: {0}")]
    MalformedPayload(String),
}

impl WebhookError {
    /// Returns true when the delivery could not be authenticated.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            WebhookError::MissingSignature
                | WebhookError::InvalidSignatureFormat(_)
                | WebhookError::SignatureMismatch
                | WebhookError::InvalidSecret
        )
    }
}
