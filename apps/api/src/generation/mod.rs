// Career advice generation: retrieve matching careers, prompt the LLM, return the outcome.
// All LLM calls go through llm_client — no direct Gemini HTTP calls here.

pub mod advisor;
pub mod handlers;
pub mod prompts;
