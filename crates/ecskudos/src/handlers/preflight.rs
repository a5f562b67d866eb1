//! Global CORS preflight responder.

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "X-Requested-With";
pub const ALLOW_METHODS: &str = "POST, GET, PUT, DELETE, OPTIONS";

/// Answers every `OPTIONS` request with 204 and the CORS headers, before
/// routing. Other methods pass through untouched.
pub async fn global_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight_response();
    }

    next.run(request).await
}

fn preflight_response() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        ],
    )
        .into_response()
}
