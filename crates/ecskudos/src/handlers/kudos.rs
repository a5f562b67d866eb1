//! Kudos listing handler.

use axum::{
    extract::{Path, State},
    Json,
};

use ecskudos_core::kudos::Kudo;

use crate::{handlers::AppError, state::AppState};

/// List the kudos of a user (GET /api/kudos/{user}).
///
/// Returns `[]` when the user has none.
pub async fn list_kudos(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<Kudo>>, AppError> {
    let kudos = state.kudo_repo.list_kudos_by_user(&user).await?;

    tracing::debug!(%user, count = kudos.len(), "Listed kudos");

    Ok(Json(kudos))
}
