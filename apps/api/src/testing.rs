//! In-memory doubles for the injected collaborators, plus shared fixtures.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::{CallerIdentity, IdentityResolver};
use crate::llm_client::{LlmError, ModelInvoker};
use crate::models::assessment::{AssessmentRow, NewAssessment};
use crate::models::cover_letter::{CoverLetterRow, NewCoverLetter, STATUS_COMPLETED};
use crate::models::quiz::QuizQuestion;
use crate::models::user::User;
use crate::persistence::PersistenceGateway;
use crate::state::Services;

pub const CALLER_ID: &str = "clerk-user-123";

pub fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        external_id: CALLER_ID.to_string(),
        industry: Some("Software Development".to_string()),
        experience: Some(5),
        skills: Some(vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
        ]),
        bio: Some(
            "Experienced software engineer with a passion for building scalable applications"
                .to_string(),
        ),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn sample_questions() -> Vec<QuizQuestion> {
    let question = |q: &str, options: [&str; 4], correct: &str, explanation: &str| QuizQuestion {
        question: q.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_string(),
        explanation: explanation.to_string(),
    };
    vec![
        question(
            "What is React?",
            ["A JavaScript library", "A database", "A runtime environment", "A server"],
            "A JavaScript library",
            "React is a library for building UIs",
        ),
        question(
            "What is Node.js?",
            ["A programming language", "A runtime environment", "A database", "A framework"],
            "A runtime environment",
            "Node.js runs JavaScript on the server",
        ),
        question(
            "What is TypeScript?",
            ["A superset of JavaScript", "A database", "A CSS framework", "A browser"],
            "A superset of JavaScript",
            "TypeScript adds static typing to JavaScript",
        ),
    ]
}

/// Resolves only the users it was given.
pub struct FixedIdentity {
    users: Vec<User>,
}

impl FixedIdentity {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl IdentityResolver for FixedIdentity {
    async fn resolve(&self, caller: &CallerIdentity) -> Result<User, AppError> {
        let external_id = caller.id().ok_or(AppError::Unauthorized)?;
        self.users
            .iter()
            .find(|u| u.external_id == external_id)
            .cloned()
            .ok_or(AppError::UserNotFound)
    }
}

/// Replays queued completions in order and records every prompt it receives.
#[derive(Default)]
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn respond(&self, text: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Err(message.into()));
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelInvoker for ScriptedModel {
    async fn invoke(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(LlmError::Api {
                status: 503,
                message,
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

/// Vec-backed gateway with switches to simulate storage faults.
#[derive(Default)]
pub struct MemoryGateway {
    cover_letters: Mutex<Vec<CoverLetterRow>>,
    assessments: Mutex<Vec<AssessmentRow>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryGateway {
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn assessments(&self) -> Vec<AssessmentRow> {
        self.assessments.lock().unwrap().clone()
    }

    pub fn cover_letters(&self) -> Vec<CoverLetterRow> {
        self.cover_letters.lock().unwrap().clone()
    }

    /// Inserts a row directly, bypassing call counting.
    pub fn seed_cover_letter(&self, row: CoverLetterRow) {
        self.cover_letters.lock().unwrap().push(row);
    }

    fn check(&self, flag: &AtomicBool) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if flag.load(Ordering::SeqCst) {
            return Err(AppError::PersistenceFailed(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn create_cover_letter(&self, letter: NewCoverLetter) -> Result<CoverLetterRow, AppError> {
        self.check(&self.fail_writes)?;
        let row = CoverLetterRow {
            id: Uuid::new_v4(),
            user_id: letter.user_id,
            content: letter.content,
            job_title: letter.job_title,
            company_name: letter.company_name,
            job_description: letter.job_description,
            status: STATUS_COMPLETED.to_string(),
            created_at: Utc::now(),
        };
        self.cover_letters.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_cover_letters(&self, user_id: Uuid) -> Result<Vec<CoverLetterRow>, AppError> {
        self.check(&self.fail_reads)?;
        Ok(self
            .cover_letters
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_cover_letter(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CoverLetterRow>, AppError> {
        self.check(&self.fail_reads)?;
        Ok(self
            .cover_letters
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id && c.user_id == user_id)
            .cloned())
    }

    async fn delete_cover_letter(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<CoverLetterRow, AppError> {
        self.check(&self.fail_writes)?;
        let mut letters = self.cover_letters.lock().unwrap();
        let index = letters
            .iter()
            .position(|c| c.id == id && c.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("Cover letter {id} not found")))?;
        Ok(letters.remove(index))
    }

    async fn create_assessment(&self, assessment: NewAssessment) -> Result<AssessmentRow, AppError> {
        self.check(&self.fail_writes)?;
        let row = AssessmentRow {
            id: Uuid::new_v4(),
            user_id: assessment.user_id,
            quiz_score: assessment.quiz_score,
            questions: Json(assessment.questions),
            category: assessment.category,
            improvement_tip: assessment.improvement_tip,
            created_at: Utc::now(),
        };
        self.assessments.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, AppError> {
        self.check(&self.fail_reads)?;
        Ok(self
            .assessments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// One user, a scripted model and an empty memory store, wired into `Services`.
pub struct Harness {
    pub user: User,
    pub llm: Arc<ScriptedModel>,
    pub store: Arc<MemoryGateway>,
    pub services: Services,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_user(sample_user())
    }

    pub fn with_user(user: User) -> Self {
        let llm = Arc::new(ScriptedModel::default());
        let store = Arc::new(MemoryGateway::default());
        let services = Services {
            identity: Arc::new(FixedIdentity::new(vec![user.clone()])),
            llm: llm.clone(),
            store: store.clone(),
        };
        Self {
            user,
            llm,
            store,
            services,
        }
    }

    pub fn caller(&self) -> CallerIdentity {
        CallerIdentity::authenticated(self.user.external_id.clone())
    }
}
