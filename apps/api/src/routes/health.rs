use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Static liveness message.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Career Guidance RAG API is running 🚀"
    }))
}

/// GET /health
/// Returns a simple status object with service version and dataset size.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-api",
        "careers": state.retriever.len()
    }))
}
