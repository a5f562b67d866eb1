//! Pure functions for mapping webhook errors to HTTP status codes.

use super::WebhookError;

/// Maps a [`WebhookError`] to an HTTP status code.
///
/// - authentication failures -> 401 (Unauthorized)
/// - everything else (missing event kind, content type, malformed body) -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use ecskudos_core::webhook::{webhook_error_to_status_code, WebhookError};
///
/// assert_eq!(webhook_error_to_status_code(&WebhookError::SignatureMismatch), 401);
/// assert_eq!(webhook_error_to_status_code(&WebhookError::MissingEventType), 400);
/// ```
pub fn webhook_error_to_status_code(error: &WebhookError) -> u16 {
    if error.is_auth_error() {
        401
    } else {
        400
    }
}
