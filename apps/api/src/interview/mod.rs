// Interview prep: AI-generated quizzes, scored submissions with improvement tips.

pub mod handlers;
pub mod service;
