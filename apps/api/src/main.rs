mod config;
mod errors;
mod llm_client;
mod ranking;
mod resumes;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ranking::catalog::{RoleCatalog, SkillCatalog};
use crate::ranking::ranker::RoleRanker;
use crate::resumes::ResumeTextStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RoleFinder API v{}", env!("CARGO_PKG_VERSION"));

    // Catalogs are fixed for the life of the process; a bad one is a deployment bug
    let roles = RoleCatalog::builtin().context("Invalid role catalog")?;
    let skills = SkillCatalog::builtin().context("Invalid skill catalog")?;
    info!(
        "Catalogs loaded: {} roles, {} skills",
        roles.len(),
        skills.len()
    );

    let ranker = RoleRanker::from_config(&config, roles, skills)?;
    info!(
        "Ranker ready (default location: {}, LLM re-rank: {})",
        config.default_location,
        if config.rerank_ready() { "on" } else { "off" }
    );

    let resumes = ResumeTextStore::new(config.resume_texts_path.clone());
    info!("Resume texts stored at {}", resumes.path().display());

    let state = AppState {
        ranker: Arc::new(ranker),
        resumes,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
