//! Response parser — turns raw model text into typed artifacts.
//!
//! Free text is trimmed and otherwise untouched (an empty result is valid).
//! Quizzes are fence-stripped and deserialized all-or-nothing into `QuizArtifact`.

use tracing::warn;

use crate::errors::AppError;
use crate::generation::prompts::GenerationRequest;
use crate::models::quiz::{QuizArtifact, QuizQuestion};

/// A generated, immutable piece of content from one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedArtifact {
    CoverLetter { content: String },
    Quiz { questions: Vec<QuizQuestion> },
    Tip { text: String },
}

/// Parses raw model output according to the kind of request that produced it.
pub fn parse_response(
    request: &GenerationRequest,
    raw: &str,
) -> Result<GeneratedArtifact, AppError> {
    Ok(match request {
        GenerationRequest::CoverLetter { .. } => GeneratedArtifact::CoverLetter {
            content: parse_text(raw),
        },
        GenerationRequest::Quiz => GeneratedArtifact::Quiz {
            questions: parse_quiz(raw)?.questions,
        },
        GenerationRequest::ImprovementTip { .. } => GeneratedArtifact::Tip {
            text: parse_text(raw),
        },
    })
}

/// Free-text artifacts: leading/trailing whitespace removed, nothing else.
pub fn parse_text(raw: &str) -> String {
    raw.trim().to_string()
}

/// Parses a quiz payload, optionally wrapped in a code fence.
///
/// Fails with `MalformedResponse` when the text is not JSON, does not match
/// `{"questions": [QuizQuestion, ...]}`, or any question has no options.
/// Question order is preserved exactly.
pub fn parse_quiz(raw: &str) -> Result<QuizArtifact, AppError> {
    let text = strip_json_fences(raw);
    let artifact: QuizArtifact = serde_json::from_str(text)
        .map_err(|e| AppError::MalformedResponse(format!("quiz response is not valid: {e}")))?;

    for (index, question) in artifact.questions.iter().enumerate() {
        if question.options.is_empty() {
            return Err(AppError::MalformedResponse(format!(
                "quiz question {} has no options",
                index + 1
            )));
        }
        if !question.options.contains(&question.correct_answer) {
            warn!(
                "Quiz question {} has a correctAnswer that is not among its options: {:?}",
                index + 1,
                question.question.chars().take(60).collect::<String>()
            );
        }
    }

    Ok(artifact)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
