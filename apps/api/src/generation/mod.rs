//! AI generation pipeline: prompt building, model invocation, response parsing, scoring.
//! All model calls go through `llm_client::ModelInvoker`.

pub mod parser;
pub mod prompts;
pub mod scoring;

use tracing::debug;

use crate::errors::AppError;
use crate::generation::parser::{parse_response, GeneratedArtifact};
use crate::generation::prompts::{build_prompt, GenerationRequest};
use crate::llm_client::ModelInvoker;
use crate::models::user::User;

/// Runs one generation step: build prompt → invoke model → parse into a typed artifact.
///
/// Model failures surface as `GenerationFailed`, unparsable output as `MalformedResponse`.
pub async fn generate(
    llm: &dyn ModelInvoker,
    request: &GenerationRequest,
    user: &User,
) -> Result<GeneratedArtifact, AppError> {
    let prompt = build_prompt(request, user);
    debug!(
        "Invoking model for {} ({} prompt chars)",
        request.kind(),
        prompt.len()
    );

    let raw = llm.invoke(&prompt).await.map_err(|e| {
        AppError::GenerationFailed(format!("{} generation failed: {e}", request.kind()))
    })?;

    parse_response(request, &raw)
}
