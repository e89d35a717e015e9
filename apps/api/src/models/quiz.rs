use serde::{Deserialize, Serialize};

/// A single multiple-choice interview question, in the shape the model is asked to return.
///
/// `correct_answer` is expected to be one of `options`; a mismatch is a model fault and is
/// only logged, never rejected. `options` may be omitted in quiz submissions; model output
/// without options is rejected by `generation::parser::parse_quiz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

/// The full structured quiz payload: `{"questions": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizArtifact {
    pub questions: Vec<QuizQuestion>,
}
