//! Axum route handlers for the Interview API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::identity::CallerIdentity;
use crate::interview::service::{self, QuizSubmission};
use crate::models::assessment::AssessmentRow;
use crate::models::quiz::QuizQuestion;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

/// POST /api/v1/interview/quiz
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<QuizResponse>, AppError> {
    let questions = service::generate_quiz(&state.services, &caller).await?;
    Ok(Json(QuizResponse { questions }))
}

/// POST /api/v1/interview/assessments
pub async fn handle_save_result(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(submission): Json<QuizSubmission>,
) -> Result<(StatusCode, Json<AssessmentRow>), AppError> {
    let assessment = service::save_quiz_result(&state.services, &caller, submission).await?;
    Ok((StatusCode::CREATED, Json(assessment)))
}

/// GET /api/v1/interview/assessments
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<Vec<AssessmentRow>>, AppError> {
    Ok(Json(service::list_assessments(&state.services, &caller).await?))
}
