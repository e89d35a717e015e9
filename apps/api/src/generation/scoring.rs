//! Score evaluator — pairs questions with submitted answers by position.
//!
//! Matching is exact string equality, no normalization. Sequences of different
//! lengths are rejected rather than padded.

use crate::errors::AppError;
use crate::models::assessment::QuestionResult;
use crate::models::quiz::QuizQuestion;

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Percentage of correct answers, 0.0 – 100.0. An empty quiz scores 0.0.
    pub score: f64,
    /// One entry per question, in quiz order.
    pub results: Vec<QuestionResult>,
}

impl Evaluation {
    /// The incorrectly answered questions, in original order.
    pub fn wrong_questions(&self) -> Vec<QuestionResult> {
        self.results
            .iter()
            .filter(|r| !r.is_correct)
            .cloned()
            .collect()
    }

    pub fn all_correct(&self) -> bool {
        self.results.iter().all(|r| r.is_correct)
    }
}

/// Evaluates submitted answers against the expected ones.
pub fn evaluate(questions: &[QuizQuestion], answers: &[String]) -> Result<Evaluation, AppError> {
    if questions.len() != answers.len() {
        return Err(AppError::InvalidInput(format!(
            "expected {} answers, got {}",
            questions.len(),
            answers.len()
        )));
    }

    let results: Vec<QuestionResult> = questions
        .iter()
        .zip(answers)
        .map(|(q, answer)| QuestionResult {
            question: q.question.clone(),
            answer: q.correct_answer.clone(),
            user_answer: answer.clone(),
            is_correct: *answer == q.correct_answer,
            explanation: q.explanation.clone(),
        })
        .collect();

    let score = if results.is_empty() {
        0.0
    } else {
        let correct = results.iter().filter(|r| r.is_correct).count();
        correct as f64 / results.len() as f64 * 100.0
    };

    Ok(Evaluation { score, results })
}
