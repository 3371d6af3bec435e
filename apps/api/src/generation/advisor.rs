//! Career Advisor — the retrieval-augmented generation step behind `/ask`.
//!
//! Flow: retrieve top-k careers → build prompt → LLM generate → outcome.
//!
//! Failures never escape as errors: the caller always gets an `AdviceOutcome`, and
//! the HTTP layer serializes either variant with status 200.

use serde::Serialize;
use tracing::{info, warn};

use crate::generation::prompts::{ADVISOR_PROMPT_TEMPLATE, FALLBACK_SUGGESTION};
use crate::llm_client::prompts::CAREER_ASSISTANT_PERSONA;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::career::CareerRecord;
use crate::retrieval::LexicalRetriever;

/// Result of answering one query.
///
/// Serialized untagged, so the JSON is either `{"suggestion", "matches"}` or
/// `{"error", "suggestion"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdviceOutcome {
    Success {
        suggestion: String,
        matches: Vec<CareerRecord>,
    },
    Failure {
        error: String,
        suggestion: String,
    },
}

impl AdviceOutcome {
    fn failure(error: &LlmError) -> Self {
        AdviceOutcome::Failure {
            error: format!("An error occurred: {error}"),
            suggestion: FALLBACK_SUGGESTION.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AdviceOutcome::Success { .. })
    }
}

/// Answers `query` with the `top_k` best-matching careers as context.
pub async fn advise(
    retriever: &LexicalRetriever,
    generator: &dyn TextGenerator,
    query: &str,
    top_k: usize,
) -> AdviceOutcome {
    let matches = retriever.retrieve(query, top_k);
    info!(
        "Retrieved {} careers: [{}]",
        matches.len(),
        matches
            .iter()
            .map(|c| c.role.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let prompt = build_advice_prompt(query, &matches);

    match generator.generate(&prompt).await {
        Ok(suggestion) => AdviceOutcome::Success {
            suggestion,
            matches,
        },
        Err(e) => {
            warn!("Advice generation failed: {e}");
            AdviceOutcome::failure(&e)
        }
    }
}

/// Fills the advisor template with the query and one line per career.
pub fn build_advice_prompt(query: &str, careers: &[CareerRecord]) -> String {
    let careers_text = careers
        .iter()
        .map(|c| {
            format!(
                "- {}: {} (Skills: {})",
                c.role,
                c.description,
                c.skills_core.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    ADVISOR_PROMPT_TEMPLATE
        .replace("{persona}", CAREER_ASSISTANT_PERSONA)
        .replace("{careers}", &careers_text)
        .replace("{query}", query)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
