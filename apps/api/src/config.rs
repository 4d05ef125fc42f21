use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_LOCATION: &str = "Bangalore";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 15;
const DEFAULT_RESUME_TEXTS_PATH: &str = "data/resume_texts.json";

/// Application configuration loaded from environment variables.
/// Only malformed numeric values abort startup; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub enable_llm_rerank: bool,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub llm_timeout: Duration,
    pub default_location: String,
    pub resume_texts_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_timeout_secs = match optional_env("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };

        Ok(Config {
            enable_llm_rerank: optional_env("ENABLE_LLM_RERANK")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            default_location: optional_env("DEFAULT_LOCATION")
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            resume_texts_path: optional_env("RESUME_TEXTS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESUME_TEXTS_PATH)),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True only when re-ranking is switched on AND a credential is present.
    pub fn rerank_ready(&self) -> bool {
        self.enable_llm_rerank && self.openai_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_llm_rerank: false,
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            default_location: DEFAULT_LOCATION.to_string(),
            resume_texts_path: PathBuf::from(DEFAULT_RESUME_TEXTS_PATH),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads an env var, treating unset and whitespace-only values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
