// Shared prompt fragments.
// Each feature that builds prompts keeps its templates in generation::prompts;
// this file holds cross-cutting instructions.

/// Appended to prompts whose response is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Return the response in this JSON format only, \
    no additional text, no explanations, no markdown:";

/// Placeholder rendered for absent optional profile fields.
pub const NOT_SPECIFIED: &str = "Not specified";
