//! GitHub webhook intake handler.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
};

use ecskudos_core::kudos::{translate_event, Translation};
use ecskudos_core::webhook::{
    extract_payload, parse_event, verify_signature, DELIVERY_HEADER, EVENT_HEADER,
    SIGNATURE_HEADER,
};

use crate::{handlers::AppError, state::AppState};

/// GitHub caps webhook payloads at 25 MB.
pub const MAX_WEBHOOK_PAYLOAD_BYTES: usize = 25 * 1024 * 1024;

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Record a GitHub contribution (POST /api/contribution/gh).
///
/// - 401 when the signature does not verify
/// - 400 when the payload cannot be parsed
/// - 201 when a kudo was stored
/// - 202 when the event does not earn a kudo
/// - 500 when the store fails
pub async fn create_contribution(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let delivery = header(&headers, DELIVERY_HEADER).unwrap_or("-");

    verify_signature(&body, header(&headers, SIGNATURE_HEADER), state.webhook_secret())?;

    let payload = extract_payload(header(&headers, CONTENT_TYPE.as_str()), &body)?;
    let event = parse_event(header(&headers, EVENT_HEADER), &payload)?;

    match translate_event(&event) {
        Translation::Record(kudo) => {
            state.kudo_repo.create_kudo(&kudo).await?;

            tracing::info!(
                %delivery,
                user = %kudo.user,
                contribution_type = %kudo.contribution_type,
                url = %kudo.contribution_url,
                "Recorded kudo"
            );
            Ok(StatusCode::CREATED)
        }
        Translation::Skip { action } => {
            tracing::debug!(%delivery, event = event.kind(), %action, "Skipping non-opened action");
            Ok(StatusCode::ACCEPTED)
        }
        Translation::Ignore { kind } => {
            tracing::info!(%delivery, event = %kind, "Ignoring unsupported event type");
            Ok(StatusCode::ACCEPTED)
        }
    }
}
