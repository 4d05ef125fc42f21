//! Axum route handlers for the resume text API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoreTextsRequest {
    pub texts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TextsResponse {
    pub texts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StoreTextsResponse {
    pub ok: bool,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub ok: bool,
}

/// GET /api/v1/resumes/text
pub async fn handle_list_texts(
    State(state): State<AppState>,
) -> Result<Json<TextsResponse>, AppError> {
    let texts = state.resumes.load().await?;
    Ok(Json(TextsResponse { texts }))
}

/// POST /api/v1/resumes/text
///
/// Stores already-extracted plain text. Blank entries are skipped; a request
/// with nothing but blanks is rejected.
pub async fn handle_store_texts(
    State(state): State<AppState>,
    Json(request): Json<StoreTextsRequest>,
) -> Result<Json<StoreTextsResponse>, AppError> {
    let texts: Vec<String> = request
        .texts
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .collect();

    if texts.is_empty() {
        return Err(AppError::Validation(
            "texts must contain at least one non-empty resume".to_string(),
        ));
    }

    let count = state.resumes.append(texts).await?;
    Ok(Json(StoreTextsResponse { ok: true, count }))
}

/// DELETE /api/v1/resumes/text
pub async fn handle_clear_texts(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, AppError> {
    state.resumes.clear().await?;
    Ok(Json(ClearResponse { ok: true }))
}
