use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::career::CareerRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub count: usize,
    pub careers: Vec<CareerRecord>,
}

/// GET /careers
/// Lists the whole dataset in file order.
pub async fn list_careers_handler(State(state): State<AppState>) -> Json<CareerListResponse> {
    let careers = state.retriever.careers().to_vec();
    Json(CareerListResponse {
        count: careers.len(),
        careers,
    })
}

/// GET /careers/:index
pub async fn get_career_handler(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<CareerRecord>, AppError> {
    state
        .retriever
        .careers()
        .get(index)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {index} not found")))
}
