use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

pub const CATEGORY_TECHNICAL: &str = "Technical";

/// Per-question outcome of a quiz submission, stored alongside the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question: String,
    /// The expected answer.
    pub answer: String,
    pub user_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// A persisted quiz assessment. Never updated after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// 0 – 100
    pub quiz_score: f64,
    pub questions: Json<Vec<QuestionResult>>,
    pub category: String,
    pub improvement_tip: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for an assessment insert.
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub user_id: Uuid,
    pub quiz_score: f64,
    pub questions: Vec<QuestionResult>,
    pub category: String,
    pub improvement_tip: Option<String>,
}
