//! Heuristic role scoring — substring matching of role titles, title tokens,
//! and catalog skills against the lower-cased resume corpus.
//!
//! Matching is plain substring containment, so "qa" also hits "qality" and a
//! shared token like "lead" credits every role containing it.

use crate::ranking::catalog::{CatalogEntry, SkillCatalog};

/// Bonus when the full role title occurs in the corpus.
pub const TITLE_BONUS: u32 = 30;
/// Bonus per title token (longer than `MIN_TOKEN_LEN` chars) found in the corpus.
pub const TOKEN_BONUS: u32 = 5;
/// Bonus per catalog skill found in the corpus.
pub const SKILL_BONUS: u32 = 3;
const MIN_TOKEN_LEN: usize = 3;
const MAX_REASON_SKILLS: usize = 5;
const FALLBACK_REASON: &str = "Role keyword alignment";

/// Separator placed between resume texts when building the corpus.
pub const CORPUS_SEPARATOR: &str = "\n\n";

/// Concatenated resume texts for one ranking request.
#[derive(Debug, Clone)]
pub struct ResumeCorpus {
    raw: String,
    lower: String,
}

impl ResumeCorpus {
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let raw = texts
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<&str>>()
            .join(CORPUS_SEPARATOR);
        let lower = raw.to_lowercase();
        Self { raw, lower }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn contains(&self, lowered_needle: &str) -> bool {
        self.lower.contains(lowered_needle)
    }
}

/// Skills found in the corpus, in catalog order. Independent of the role, so
/// computed once per request.
#[derive(Debug, Clone, Default)]
pub struct SkillMatches {
    pub names: Vec<String>,
}

impl SkillMatches {
    pub fn find(corpus: &ResumeCorpus, skills: &SkillCatalog) -> Self {
        let names = skills
            .entries()
            .iter()
            .filter(|s| corpus.contains(&s.lower))
            .map(|s| s.name.clone())
            .collect();
        Self { names }
    }

    pub fn bonus(&self) -> u32 {
        self.names.len() as u32 * SKILL_BONUS
    }

    /// "Matched skills: a, b, c, d, e..." or the generic fallback.
    pub fn reason(&self) -> String {
        if self.names.is_empty() {
            return FALLBACK_REASON.to_string();
        }
        let shown = self
            .names
            .iter()
            .take(MAX_REASON_SKILLS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let ellipsis = if self.names.len() > MAX_REASON_SKILLS {
            "..."
        } else {
            ""
        };
        format!("Matched skills: {shown}{ellipsis}")
    }
}

/// Title-only portion of the score: full-title bonus plus per-token bonuses.
pub fn title_score(corpus: &ResumeCorpus, role: &CatalogEntry) -> u32 {
    let mut score = 0;

    if corpus.contains(&role.lower) {
        score += TITLE_BONUS;
    }

    score += role
        .lower
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_LEN && corpus.contains(token))
        .count() as u32
        * TOKEN_BONUS;

    score
}

/// Heuristic score and reason for one role.
pub fn score_role(
    corpus: &ResumeCorpus,
    role: &CatalogEntry,
    skills: &SkillMatches,
) -> (u32, String) {
    (title_score(corpus, role) + skills.bonus(), skills.reason())
}
