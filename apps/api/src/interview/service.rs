//! Interview quiz pipelines.
//!
//! generate_quiz:    resolve identity → quiz prompt → model → fenced-JSON parse
//! save_quiz_result: resolve identity → score answers → (tip prompt → model, best effort)
//!                   → persist assessment

use anyhow::anyhow;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::generate;
use crate::generation::parser::GeneratedArtifact;
use crate::generation::prompts::GenerationRequest;
use crate::generation::scoring::evaluate;
use crate::identity::CallerIdentity;
use crate::llm_client::ModelInvoker;
use crate::models::assessment::{AssessmentRow, NewAssessment, QuestionResult, CATEGORY_TECHNICAL};
use crate::models::quiz::QuizQuestion;
use crate::models::user::User;
use crate::state::Services;

/// Tolerance between the submitted score and the recomputed one before a warning is logged.
const SCORE_TOLERANCE: f64 = 0.01;

/// Request body for saving a completed quiz.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizSubmission {
    pub questions: Vec<QuizQuestion>,
    pub answers: Vec<String>,
    pub score: f64,
}

/// Generates interview questions tailored to the caller's industry and skills.
pub async fn generate_quiz(
    services: &Services,
    caller: &CallerIdentity,
) -> Result<Vec<QuizQuestion>, AppError> {
    let user = services.identity.resolve(caller).await?;
    info!("Generating quiz for user {}", user.id);

    let GeneratedArtifact::Quiz { questions } =
        generate(services.llm.as_ref(), &GenerationRequest::Quiz, &user).await?
    else {
        return Err(AppError::Internal(anyhow!(
            "quiz request produced a different artifact kind"
        )));
    };

    info!("Generated {} quiz questions for user {}", questions.len(), user.id);
    Ok(questions)
}

/// Scores a quiz submission and stores it as an assessment.
///
/// The submitted score is persisted as given. An improvement tip is generated only when at
/// least one answer is wrong, and a failed tip never fails the save.
pub async fn save_quiz_result(
    services: &Services,
    caller: &CallerIdentity,
    submission: QuizSubmission,
) -> Result<AssessmentRow, AppError> {
    let user = services.identity.resolve(caller).await?;

    if !submission.score.is_finite() || !(0.0..=100.0).contains(&submission.score) {
        return Err(AppError::InvalidInput(format!(
            "score must be between 0 and 100, got {}",
            submission.score
        )));
    }

    let evaluation = evaluate(&submission.questions, &submission.answers)?;
    if (evaluation.score - submission.score).abs() > SCORE_TOLERANCE {
        warn!(
            "Submitted score {:.2} differs from evaluated score {:.2} for user {}",
            submission.score, evaluation.score, user.id
        );
    }

    let improvement_tip = if evaluation.all_correct() {
        None
    } else {
        generate_improvement_tip(services.llm.as_ref(), &user, evaluation.wrong_questions()).await
    };

    services
        .store
        .create_assessment(NewAssessment {
            user_id: user.id,
            quiz_score: submission.score,
            questions: evaluation.results,
            category: CATEGORY_TECHNICAL.to_string(),
            improvement_tip,
        })
        .await
}

/// All of the caller's assessments, oldest first.
pub async fn list_assessments(
    services: &Services,
    caller: &CallerIdentity,
) -> Result<Vec<AssessmentRow>, AppError> {
    let user = services.identity.resolve(caller).await?;
    services.store.list_assessments(user.id).await
}

/// Best-effort tip generation. Failures are logged and reported as `None`.
async fn generate_improvement_tip(
    llm: &dyn ModelInvoker,
    user: &User,
    wrong_questions: Vec<QuestionResult>,
) -> Option<String> {
    let wrong_count = wrong_questions.len();
    let request = GenerationRequest::ImprovementTip { wrong_questions };

    match generate(llm, &request, user).await {
        Ok(GeneratedArtifact::Tip { text }) => Some(text),
        Ok(other) => {
            warn!("Improvement tip request produced an unexpected artifact: {other:?}");
            None
        }
        Err(e) => {
            warn!(
                "Improvement tip generation failed for user {} ({} wrong answers); saving without tip: {e}",
                user.id, wrong_count
            );
            None
        }
    }
}
