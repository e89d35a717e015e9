//! Postgres implementation of the persistence gateway.
//!
//! Expected tables (migrations are managed outside this service):
//!
//! ```sql
//! users         (id UUID PK, external_id TEXT UNIQUE, industry TEXT, experience INT,
//!                skills TEXT[], bio TEXT, created_at TIMESTAMPTZ)
//! cover_letters (id UUID PK, user_id UUID REFERENCES users, content TEXT, job_title TEXT,
//!                company_name TEXT, job_description TEXT, status TEXT, created_at TIMESTAMPTZ)
//! assessments   (id UUID PK, user_id UUID REFERENCES users, quiz_score DOUBLE PRECISION,
//!                questions JSONB, category TEXT, improvement_tip TEXT, created_at TIMESTAMPTZ)
//! ```

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, NewAssessment};
use crate::models::cover_letter::{CoverLetterRow, NewCoverLetter, STATUS_COMPLETED};
use crate::persistence::PersistenceGateway;

const COVER_LETTER_COLUMNS: &str =
    "id, user_id, content, job_title, company_name, job_description, status, created_at";
const ASSESSMENT_COLUMNS: &str =
    "id, user_id, quiz_score, questions, category, improvement_tip, created_at";

pub struct PgGateway {
    pool: PgPool,
}

impl PgGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersistenceGateway for PgGateway {
    async fn create_cover_letter(&self, letter: NewCoverLetter) -> Result<CoverLetterRow, AppError> {
        let row = sqlx::query_as::<_, CoverLetterRow>(&format!(
            r#"
            INSERT INTO cover_letters
                (id, user_id, content, job_title, company_name, job_description, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING {COVER_LETTER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(letter.user_id)
        .bind(&letter.content)
        .bind(&letter.job_title)
        .bind(&letter.company_name)
        .bind(&letter.job_description)
        .bind(STATUS_COMPLETED)
        .fetch_one(&self.pool)
        .await?;

        info!("Stored cover letter {} for user {}", row.id, row.user_id);
        Ok(row)
    }

    async fn list_cover_letters(&self, user_id: Uuid) -> Result<Vec<CoverLetterRow>, AppError> {
        Ok(sqlx::query_as::<_, CoverLetterRow>(&format!(
            "SELECT {COVER_LETTER_COLUMNS} FROM cover_letters WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_cover_letter(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CoverLetterRow>, AppError> {
        Ok(sqlx::query_as::<_, CoverLetterRow>(&format!(
            "SELECT {COVER_LETTER_COLUMNS} FROM cover_letters WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete_cover_letter(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<CoverLetterRow, AppError> {
        let deleted = sqlx::query_as::<_, CoverLetterRow>(&format!(
            "DELETE FROM cover_letters WHERE id = $1 AND user_id = $2 RETURNING {COVER_LETTER_COLUMNS}"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cover letter {id} not found")))?;

        info!("Deleted cover letter {id} for user {user_id}");
        Ok(deleted)
    }

    async fn create_assessment(&self, assessment: NewAssessment) -> Result<AssessmentRow, AppError> {
        let row = sqlx::query_as::<_, AssessmentRow>(&format!(
            r#"
            INSERT INTO assessments
                (id, user_id, quiz_score, questions, category, improvement_tip, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING {ASSESSMENT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(assessment.user_id)
        .bind(assessment.quiz_score)
        .bind(Json(&assessment.questions))
        .bind(&assessment.category)
        .bind(&assessment.improvement_tip)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Stored assessment {} (score {:.2}) for user {}",
            row.id, row.quiz_score, row.user_id
        );
        Ok(row)
    }

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, AppError> {
        Ok(sqlx::query_as::<_, AssessmentRow>(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM assessments WHERE user_id = $1 ORDER BY created_at ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
