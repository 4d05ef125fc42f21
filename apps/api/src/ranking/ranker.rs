//! RoleRanker — scores every catalog role against resume text, optionally
//! re-ranks the leaders, and attaches portal search links.
//!
//! `rank_roles` never fails: a re-rank error is logged and the heuristic
//! ordering is returned instead.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::ranking::catalog::{RoleCatalog, SkillCatalog};
use crate::ranking::heuristic::{score_role, ResumeCorpus, SkillMatches};
use crate::ranking::rerank::{
    merge_reranked, truncate_chars, LlmReranker, RerankFailure, Reranker, MAX_CORPUS_CHARS,
    RERANK_TOP_N,
};
use crate::ranking::search_links::{build_search_links, SearchLinkSet};

/// A catalog role with its score, justification, and search links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleScore {
    pub role: String,
    pub score: u32,
    pub reason: String,
    pub search_links: SearchLinkSet,
}

/// Whether and how the re-rank pass runs.
#[derive(Clone)]
pub enum RerankMode {
    Disabled,
    /// Requested by config, but no credential was supplied.
    MissingCredential,
    Enabled(Arc<dyn Reranker>),
}

#[derive(Clone)]
pub struct RoleRanker {
    roles: RoleCatalog,
    skills: SkillCatalog,
    default_location: String,
    rerank: RerankMode,
}

impl RoleRanker {
    pub fn new(
        roles: RoleCatalog,
        skills: SkillCatalog,
        default_location: impl Into<String>,
        rerank: RerankMode,
    ) -> Self {
        Self {
            roles,
            skills,
            default_location: default_location.into(),
            rerank,
        }
    }

    /// Wires the LLM re-ranker from configuration.
    pub fn from_config(config: &Config, roles: RoleCatalog, skills: SkillCatalog) -> Result<Self> {
        let rerank = match (config.enable_llm_rerank, &config.openai_api_key) {
            (false, _) => RerankMode::Disabled,
            (true, None) => {
                warn!(
                    "ENABLE_LLM_RERANK is set but OPENAI_API_KEY is missing; \
                     ranking will be heuristic-only"
                );
                RerankMode::MissingCredential
            }
            (true, Some(key)) => {
                let llm = LlmClient::new(key.clone(), &config.openai_base_url, config.llm_timeout)
                    .context("Failed to build LLM client")?;
                info!(
                    "LLM re-rank enabled (model: {}, timeout: {}s)",
                    crate::llm_client::MODEL,
                    config.llm_timeout.as_secs()
                );
                RerankMode::Enabled(Arc::new(LlmReranker(llm)))
            }
        };

        Ok(Self::new(
            roles,
            skills,
            config.default_location.clone(),
            rerank,
        ))
    }

    pub fn roles(&self) -> &RoleCatalog {
        &self.roles
    }

    pub fn skills(&self) -> &SkillCatalog {
        &self.skills
    }

    /// `location` when it has content, the configured default otherwise.
    pub fn resolve_location<'a>(&'a self, location: Option<&'a str>) -> &'a str {
        location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.default_location)
    }

    /// Ranks every catalog role. One entry per role, best first.
    pub async fn rank_roles<S: AsRef<str>>(
        &self,
        resume_texts: &[S],
        location: Option<&str>,
    ) -> Vec<RoleScore> {
        let corpus = ResumeCorpus::from_texts(resume_texts);
        let ranked = self.heuristic_rank(&corpus, self.resolve_location(location));

        match &self.rerank {
            RerankMode::Disabled => ranked,
            RerankMode::MissingCredential => {
                warn!("LLM re-rank requested without OPENAI_API_KEY; using heuristic order");
                ranked
            }
            RerankMode::Enabled(reranker) => {
                match try_rerank(reranker.as_ref(), &corpus, ranked.clone()).await {
                    Ok(reranked) => reranked,
                    Err(e) => {
                        warn!("LLM re-rank failed, falling back to heuristic order: {e}");
                        ranked
                    }
                }
            }
        }
    }

    /// Deterministic heuristic pass, sorted by score with catalog order breaking ties.
    pub fn heuristic_rank(&self, corpus: &ResumeCorpus, location: &str) -> Vec<RoleScore> {
        let skills = SkillMatches::find(corpus, &self.skills);

        let mut ranked: Vec<RoleScore> = self
            .roles
            .entries()
            .iter()
            .map(|role| {
                let (score, reason) = score_role(corpus, role, &skills);
                RoleScore {
                    role: role.name.clone(),
                    score,
                    reason,
                    search_links: build_search_links(&role.name, location),
                }
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

async fn try_rerank(
    reranker: &dyn Reranker,
    corpus: &ResumeCorpus,
    ranked: Vec<RoleScore>,
) -> Result<Vec<RoleScore>, RerankFailure> {
    let excerpt = truncate_chars(corpus.raw(), MAX_CORPUS_CHARS);
    let candidates: Vec<String> = ranked
        .iter()
        .take(RERANK_TOP_N)
        .map(|r| r.role.clone())
        .collect();

    let reranked = reranker.rerank(excerpt, &candidates).await?;
    merge_reranked(ranked, reranked)
}
