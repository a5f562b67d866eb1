//! HMAC-SHA256 signature verification for GitHub webhook deliveries.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::WebhookError;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_PREFIX: &str = "sha256=";

/// Signs a payload the way GitHub does, returning `sha256=<hex>`.
pub fn sign_payload(payload: &[u8], secret: &[u8]) -> Result<String, WebhookError> {
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| WebhookError::InvalidSecret)?;
    mac.update(payload);
    Ok(format!(
        "{SIGNATURE_PREFIX}{}",
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Verifies the `X-Hub-Signature-256` header value against the raw body.
///
/// The comparison is constant time. An empty `secret` disables verification
/// entirely, so deliveries are accepted without a signature.
pub fn verify_signature(
    payload: &[u8],
    signature: Option<&str>,
    secret: &[u8],
) -> Result<(), WebhookError> {
    if secret.is_empty() {
        return Ok(());
    }

    let signature = signature
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(WebhookError::MissingSignature)?;

    let hex_digest = signature.strip_prefix(SIGNATURE_PREFIX).ok_or_else(|| {
        WebhookError::InvalidSignatureFormat(format!("expected 'sha256=<hex>', got: {signature}"))
    })?;

    let expected = hex::decode(hex_digest)
        .map_err(|e| WebhookError::InvalidSignatureFormat(e.to_string()))?;

    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| WebhookError::InvalidSecret)?;
    mac.update(payload);
    mac.verify_slice(&expected)
        .map_err(|_| WebhookError::SignatureMismatch)
}
