pub mod careers;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/ask", post(handlers::handle_ask))
        .route("/careers", get(careers::list_careers_handler))
        .route("/careers/:index", get(careers::get_career_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}
