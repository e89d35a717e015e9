//! Persistence gateway — scoped reads and writes of a user's generated artifacts.
//!
//! Every method takes the resolved user's id; lookups and deletes filter by both the
//! record id and that user id. Storage faults surface as `AppError::PersistenceFailed`.

pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, NewAssessment};
use crate::models::cover_letter::{CoverLetterRow, NewCoverLetter};

pub use postgres::PgGateway;

#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Inserts a cover letter with status `completed`.
    async fn create_cover_letter(&self, letter: NewCoverLetter) -> Result<CoverLetterRow, AppError>;

    /// All of the user's cover letters, newest first. Empty when there are none.
    async fn list_cover_letters(&self, user_id: Uuid) -> Result<Vec<CoverLetterRow>, AppError>;

    /// `Ok(None)` when no cover letter with this id belongs to the user.
    async fn get_cover_letter(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CoverLetterRow>, AppError>;

    /// Deletes and returns the cover letter. `NotFound` when nothing matched.
    async fn delete_cover_letter(&self, user_id: Uuid, id: Uuid)
        -> Result<CoverLetterRow, AppError>;

    async fn create_assessment(&self, assessment: NewAssessment) -> Result<AssessmentRow, AppError>;

    /// All of the user's assessments, oldest first. Empty when there are none.
    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, AppError>;
}
