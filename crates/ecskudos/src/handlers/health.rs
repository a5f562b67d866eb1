use axum::http::StatusCode;

/// GET / - Health check.
///
/// Always returns 200 with an empty body.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
