// Prompt templates for the career advisor.
// Reuses the persona line from llm_client::prompts.

/// Advisor prompt template. Replace `{persona}`, `{query}` and `{careers}` before sending.
pub const ADVISOR_PROMPT_TEMPLATE: &str = "{persona}
User Query: {query}

Here are some relevant careers:
{careers}

Based on this, provide a personalized suggestion to the user.";

/// Shown to the user whenever a suggestion could not be generated.
pub const FALLBACK_SUGGESTION: &str = "Sorry, I couldn't process your request at the moment.";
