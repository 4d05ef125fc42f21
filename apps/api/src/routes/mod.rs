pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::ranking::handlers as ranking;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Ranking API
        .route("/api/v1/roles/rank", post(ranking::handle_rank_roles))
        .route("/api/v1/roles/catalog", get(ranking::handle_catalog))
        .route("/api/v1/search-links", get(ranking::handle_search_links))
        // Resume text API
        .route(
            "/api/v1/resumes/text",
            get(resumes::handle_list_texts)
                .post(resumes::handle_store_texts)
                .delete(resumes::handle_clear_texts),
        )
        .fallback(not_found)
        .with_state(state)
}
