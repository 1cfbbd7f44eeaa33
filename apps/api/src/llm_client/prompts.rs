// Shared prompt constants and prompt-building utilities.
// Each stage that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Common instruction injected into every structured-output prompt body.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    CRITICAL: Respond with the JSON value only. \
    Do NOT include any text before or after the JSON. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Common instruction against fabricating candidate history.
pub const FACTUAL_INSTRUCTION: &str = "\
    CRITICAL: Use ONLY facts present in the resume text, the assessment, and \
    the candidate's own answers. Rephrase and strengthen wording freely, but \
    do NOT invent employers, dates, degrees, metrics, or credentials.";
