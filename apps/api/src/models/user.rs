use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Domain user, owned by the identity system. Read-only to this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    /// Opaque id issued by the external identity provider.
    pub external_id: String,
    pub industry: Option<String>,
    /// Years of professional experience.
    pub experience: Option<i32>,
    pub skills: Option<Vec<String>>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Skills, treating an empty list the same as an absent one.
    pub fn skill_list(&self) -> Option<&[String]> {
        self.skills.as_deref().filter(|s| !s.is_empty())
    }
}
