use std::sync::Arc;

use crate::ranking::ranker::RoleRanker;
use crate::resumes::ResumeTextStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; concurrent requests share it without locking.
    pub ranker: Arc<RoleRanker>,
    pub resumes: ResumeTextStore,
}
