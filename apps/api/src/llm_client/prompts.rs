// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; only cross-cutting output rules live here.

/// Appended to any instruction that expects a JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Appended to any instruction that expects plain dialogue text back.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Respond with the message only: \
    no JSON, no quotation marks, no speaker label.";
