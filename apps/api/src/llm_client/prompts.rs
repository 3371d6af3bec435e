// Shared prompt fragments for Gemini calls.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Persona line that opens every career-guidance prompt.
pub const CAREER_ASSISTANT_PERSONA: &str = "You are a career guidance assistant.";
