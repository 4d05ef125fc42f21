//! Re-ranking — pluggable second pass over the top heuristic candidates.
//!
//! Default backend: `LlmReranker` (chat completion returning a JSON array).
//! `RoleRanker` holds it as `Arc<dyn Reranker>`; tests substitute their own.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::ranking::prompts::build_rerank_prompt;
use crate::ranking::ranker::RoleScore;

/// How many heuristic leaders are sent for re-ranking.
pub const RERANK_TOP_N: usize = 15;
/// Upper bound on resume characters sent with the request.
pub const MAX_CORPUS_CHARS: usize = 6000;
const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Error)]
pub enum RerankFailure {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("LLM response matched none of the {0} candidate roles")]
    NoKnownRoles(usize),
}

/// One entry of the re-rank response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RerankedRole {
    pub role: String,
    pub score: f64,
    #[serde(default)]
    pub reason: String,
}

/// A re-rank backend. Implement this to swap the scoring service without
/// touching the ranker or handlers.
#[async_trait]
pub trait Reranker: Send + Sync {
    async fn rerank(
        &self,
        resume_excerpt: &str,
        candidates: &[String],
    ) -> Result<Vec<RerankedRole>, RerankFailure>;
}

/// Re-ranks through the chat-completion API.
pub struct LlmReranker(pub LlmClient);

#[async_trait]
impl Reranker for LlmReranker {
    async fn rerank(
        &self,
        resume_excerpt: &str,
        candidates: &[String],
    ) -> Result<Vec<RerankedRole>, RerankFailure> {
        let prompt = build_rerank_prompt(resume_excerpt, candidates);
        Ok(self
            .0
            .call_json::<Vec<RerankedRole>>(&prompt, JSON_ONLY_SYSTEM)
            .await?)
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Folds a re-rank response back into the heuristic ordering.
///
/// Output order: re-ranked candidates by descending LLM score, then candidates
/// the response skipped, then roles that were never sent. Every input role
/// appears exactly once and keeps its search links. Unknown or repeated role
/// names in the response are ignored.
pub fn merge_reranked(
    heuristic: Vec<RoleScore>,
    reranked: Vec<RerankedRole>,
) -> Result<Vec<RoleScore>, RerankFailure> {
    let split = heuristic.len().min(RERANK_TOP_N);
    let mut heuristic = heuristic;
    let tail = heuristic.split_off(split);

    let index: HashMap<String, usize> = heuristic
        .iter()
        .enumerate()
        .map(|(i, r)| (r.role.clone(), i))
        .collect();
    let mut pending: Vec<Option<RoleScore>> = heuristic.into_iter().map(Some).collect();

    let mut merged = Vec::with_capacity(pending.len() + tail.len());
    for entry in reranked {
        let Some(original) = index.get(&entry.role).and_then(|&i| pending[i].take()) else {
            debug!("Ignoring re-ranked role '{}': not a pending candidate", entry.role);
            continue;
        };
        let reason = if entry.reason.trim().is_empty() {
            original.reason
        } else {
            entry.reason
        };
        merged.push(RoleScore {
            role: original.role,
            score: entry.score.clamp(0.0, MAX_SCORE).round() as u32,
            reason,
            search_links: original.search_links,
        });
    }

    if merged.is_empty() {
        return Err(RerankFailure::NoKnownRoles(pending.len()));
    }

    merged.sort_by(|a, b| b.score.cmp(&a.score));
    merged.extend(pending.into_iter().flatten());
    merged.extend(tail);
    Ok(merged)
}
