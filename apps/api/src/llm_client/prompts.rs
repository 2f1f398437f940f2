// Shared prompt constants. Each module that builds LLM prompts defines its
// own prompts.rs alongside it; this file holds cross-cutting fragments.

/// System persona sent with every generation call.
pub const CAREER_ADVISOR_SYSTEM: &str =
    "You are a professional career advisor and resume writer.";
