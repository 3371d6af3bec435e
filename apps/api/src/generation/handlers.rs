//! Axum route handlers for the advice API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::generation::advisor::{advise, AdviceOutcome};
use crate::state::AppState;

/// Upper bound on careers passed to the LLM for one query.
pub const MAX_TOP_K: usize = 10;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
    /// Overrides the configured retrieval depth; clamped to `1..=MAX_TOP_K`.
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// POST /ask
///
/// Always answers 200: success and failure are both described in the body.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Json<AdviceOutcome> {
    let top_k = effective_top_k(request.top_k, state.config.top_k);
    let span = info_span!("ask", request_id = %Uuid::new_v4(), top_k);

    async move {
        info!("Answering query ({} chars)", request.query.chars().count());
        let outcome = advise(
            &state.retriever,
            state.generator.as_ref(),
            &request.query,
            top_k,
        )
        .await;
        info!("Answered query (success={})", outcome.is_success());
        Json(outcome)
    }
    .instrument(span)
    .await
}

fn effective_top_k(requested: Option<usize>, default: usize) -> usize {
    requested.unwrap_or(default).clamp(1, MAX_TOP_K)
}
