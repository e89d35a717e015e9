use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Fields for a cover letter insert. Id, status and timestamp are assigned by the gateway.
#[derive(Debug, Clone)]
pub struct NewCoverLetter {
    pub user_id: Uuid,
    pub content: String,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
}
