use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecskudos_core::storage::{store_error_to_status_code, StoreError};
use ecskudos_core::webhook::{webhook_error_to_status_code, WebhookError};

/// Handler error. The response carries the status code mapped from the
/// underlying error and its message as a plaintext body.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(webhook_error) = self.0.downcast_ref::<WebhookError>() {
            webhook_error_to_status_code(webhook_error)
        } else if let Some(store_error) = self.0.downcast_ref::<StoreError>() {
            store_error_to_status_code(store_error)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
