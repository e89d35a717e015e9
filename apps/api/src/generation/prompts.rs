//! Prompt builder. Pure functions: absent profile fields degrade to placeholders, never errors.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, NOT_SPECIFIED};
use crate::models::assessment::QuestionResult;
use crate::models::user::User;

/// Number of questions requested per quiz.
pub const QUIZ_QUESTION_COUNT: usize = 10;

/// What to generate, with the task-specific inputs. Built per call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    CoverLetter {
        job_title: String,
        company_name: String,
        job_description: String,
    },
    Quiz,
    ImprovementTip {
        wrong_questions: Vec<QuestionResult>,
    },
}

impl GenerationRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationRequest::CoverLetter { .. } => "cover letter",
            GenerationRequest::Quiz => "quiz",
            GenerationRequest::ImprovementTip { .. } => "improvement tip",
        }
    }
}

/// Cover letter prompt template.
/// Replace: {job_title}, {company_name}, {industry}, {experience}, {skills}, {bio}, {job_description}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for a {job_title} position at {company_name}.

About the candidate:
- Industry: {industry}
- Years of Experience: {experience}
- Skills: {skills}
- Professional Background: {bio}

Job Description:
{job_description}

Requirements:
1. Use a professional, enthusiastic tone
2. Highlight relevant skills and experience
3. Show understanding of the company's needs
4. Keep it concise (max 400 words)
5. Use proper business letter formatting in markdown
6. Include specific examples of achievements
7. Relate candidate's background to job requirements

Format the letter in markdown."#;

/// Quiz prompt template. Replace: {count}, {industry}, {expertise}, {json_instruction}
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Generate {count} technical interview questions for a {industry} professional {expertise}.

Each question should be multiple choice with 4 options.

{json_instruction}
{
  "questions": [
    {
      "question": "string",
      "options": ["string", "string", "string", "string"],
      "correctAnswer": "string",
      "explanation": "string"
    }
  ]
}

The "correctAnswer" value MUST be copied exactly from one of that question's "options"."#;

/// Improvement tip prompt template. Replace: {industry}, {wrong_questions}
pub const IMPROVEMENT_TIP_PROMPT_TEMPLATE: &str = r#"The user got the following {industry} technical interview questions wrong:

{wrong_questions}

Based on these mistakes, provide a concise, specific improvement tip.
Focus on the knowledge gaps revealed by these wrong answers.
Keep the response under 2 sentences and make it encouraging.
Don't explicitly mention the mistakes, instead focus on what to learn/practice."#;

/// Builds the prompt text for a generation request.
pub fn build_prompt(request: &GenerationRequest, user: &User) -> String {
    match request {
        GenerationRequest::CoverLetter {
            job_title,
            company_name,
            job_description,
        } => COVER_LETTER_PROMPT_TEMPLATE
            .replace("{job_title}", job_title)
            .replace("{company_name}", company_name)
            .replace("{industry}", industry_of(user))
            .replace("{experience}", &experience_of(user))
            .replace("{skills}", &skills_of(user))
            .replace("{bio}", user.bio.as_deref().unwrap_or(NOT_SPECIFIED))
            .replace("{job_description}", job_description),
        GenerationRequest::Quiz => {
            let expertise = match user.skill_list() {
                Some(skills) => format!("with expertise in {}", skills.join(", ")),
                None => "covering general industry knowledge (no specific skills listed)"
                    .to_string(),
            };
            QUIZ_PROMPT_TEMPLATE
                .replace("{count}", &QUIZ_QUESTION_COUNT.to_string())
                .replace("{industry}", industry_of(user))
                .replace("{expertise}", &expertise)
                .replace("{json_instruction}", JSON_ONLY_INSTRUCTION)
        }
        GenerationRequest::ImprovementTip { wrong_questions } => {
            IMPROVEMENT_TIP_PROMPT_TEMPLATE
                .replace("{industry}", industry_of(user))
                .replace("{wrong_questions}", &render_wrong_questions(wrong_questions))
        }
    }
}

fn industry_of(user: &User) -> &str {
    user.industry
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or(NOT_SPECIFIED)
}

fn experience_of(user: &User) -> String {
    user.experience
        .map(|years| years.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

fn skills_of(user: &User) -> String {
    user.skill_list()
        .map(|skills| skills.join(", "))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

fn render_wrong_questions(wrong_questions: &[QuestionResult]) -> String {
    wrong_questions
        .iter()
        .map(|q| {
            format!(
                "Question: \"{}\"\nCorrect Answer: \"{}\"\nUser Answer: \"{}\"",
                q.question, q.answer, q.user_answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
