//! Cover letter pipeline.
//!
//! Flow: resolve identity → validate input → build prompt → invoke model →
//!       trim response → persist with status `completed`.

use anyhow::anyhow;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generate;
use crate::generation::parser::GeneratedArtifact;
use crate::generation::prompts::GenerationRequest;
use crate::identity::CallerIdentity;
use crate::models::cover_letter::{CoverLetterRow, NewCoverLetter};
use crate::state::Services;

/// Request body for cover letter generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterInput {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
}

impl CoverLetterInput {
    fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("jobTitle", &self.job_title),
            ("companyName", &self.company_name),
            ("jobDescription", &self.job_description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::InvalidInput(format!("{field} cannot be empty")));
            }
        }
        Ok(())
    }
}

/// Generates a cover letter for the caller and stores it.
pub async fn generate_cover_letter(
    services: &Services,
    caller: &CallerIdentity,
    input: CoverLetterInput,
) -> Result<CoverLetterRow, AppError> {
    let user = services.identity.resolve(caller).await?;
    input.validate()?;

    info!(
        "Generating cover letter for user {} ({} at {})",
        user.id, input.job_title, input.company_name
    );

    let request = GenerationRequest::CoverLetter {
        job_title: input.job_title.clone(),
        company_name: input.company_name.clone(),
        job_description: input.job_description.clone(),
    };

    let GeneratedArtifact::CoverLetter { content } =
        generate(services.llm.as_ref(), &request, &user).await?
    else {
        return Err(AppError::Internal(anyhow!(
            "cover letter request produced a different artifact kind"
        )));
    };

    services
        .store
        .create_cover_letter(NewCoverLetter {
            user_id: user.id,
            content,
            job_title: input.job_title,
            company_name: input.company_name,
            job_description: input.job_description,
        })
        .await
}

/// All of the caller's cover letters, newest first.
pub async fn list_cover_letters(
    services: &Services,
    caller: &CallerIdentity,
) -> Result<Vec<CoverLetterRow>, AppError> {
    let user = services.identity.resolve(caller).await?;
    services.store.list_cover_letters(user.id).await
}

/// One of the caller's cover letters, or `None` when it doesn't exist or belongs to someone else.
pub async fn get_cover_letter(
    services: &Services,
    caller: &CallerIdentity,
    id: Uuid,
) -> Result<Option<CoverLetterRow>, AppError> {
    let user = services.identity.resolve(caller).await?;
    services.store.get_cover_letter(user.id, id).await
}

/// Deletes one of the caller's cover letters. `NotFound` when there is nothing to delete.
pub async fn delete_cover_letter(
    services: &Services,
    caller: &CallerIdentity,
    id: Uuid,
) -> Result<CoverLetterRow, AppError> {
    let user = services.identity.resolve(caller).await?;
    services.store.delete_cover_letter(user.id, id).await
}
