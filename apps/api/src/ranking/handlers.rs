//! Axum route handlers for the Ranking API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::ranking::ranker::RoleScore;
use crate::ranking::search_links::{build_search_links, SearchLinkSet};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    /// Falls back to the stored resume texts when omitted.
    pub resume_texts: Option<Vec<String>>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub roles: Vec<RoleScore>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub roles: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchLinksQuery {
    pub role: String,
    pub location: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roles/rank
///
/// Ranks every catalog role against the supplied (or stored) resume texts.
/// Never fails on content: empty input just yields all-zero scores.
pub async fn handle_rank_roles(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let texts = match request.resume_texts {
        Some(texts) => texts,
        None => state.resumes.load().await?,
    };

    let roles = state
        .ranker
        .rank_roles(&texts, request.location.as_deref())
        .await;

    Ok(Json(RankResponse { roles }))
}

/// GET /api/v1/roles/catalog
pub async fn handle_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        roles: state.ranker.roles().names(),
        skills: state.ranker.skills().names(),
    })
}

/// GET /api/v1/search-links?role=..&location=..
pub async fn handle_search_links(
    State(state): State<AppState>,
    Query(query): Query<SearchLinksQuery>,
) -> Result<Json<SearchLinkSet>, AppError> {
    let role = query.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let location = state.ranker.resolve_location(query.location.as_deref());
    Ok(Json(build_search_links(role, location)))
}
