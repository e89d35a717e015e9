//! Axum route handlers for the Cover Letter API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::cover_letter::service::{self, CoverLetterInput};
use crate::errors::AppError;
use crate::identity::CallerIdentity;
use crate::models::cover_letter::CoverLetterRow;
use crate::state::AppState;

/// POST /api/v1/cover-letters
pub async fn handle_generate(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(input): Json<CoverLetterInput>,
) -> Result<(StatusCode, Json<CoverLetterRow>), AppError> {
    let letter = service::generate_cover_letter(&state.services, &caller, input).await?;
    Ok((StatusCode::CREATED, Json(letter)))
}

/// GET /api/v1/cover-letters
pub async fn handle_list(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<Vec<CoverLetterRow>>, AppError> {
    Ok(Json(
        service::list_cover_letters(&state.services, &caller).await?,
    ))
}

/// GET /api/v1/cover-letters/:id
///
/// Responds with JSON `null` when the letter does not exist for this user.
pub async fn handle_get(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<CoverLetterRow>>, AppError> {
    Ok(Json(
        service::get_cover_letter(&state.services, &caller, id).await?,
    ))
}

/// DELETE /api/v1/cover-letters/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<CoverLetterRow>, AppError> {
    Ok(Json(
        service::delete_cover_letter(&state.services, &caller, id).await?,
    ))
}
