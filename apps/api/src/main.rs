mod catalog;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::llm_client::{LlmClient, LlmConfig};
use crate::matching::ranker::JobMatcher;
use crate::resume::analyzer::LlmResumeAnalyzer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Matcher API v{}", env!("CARGO_PKG_VERSION"));

    // Load the job catalog once; it is immutable for the life of the process
    let catalog = load_catalog(&config.jobs_csv_path)?;
    let matcher = Arc::new(JobMatcher::new(catalog));
    info!("Job catalog ready ({} postings)", matcher.catalog_len());

    // Initialize LLM client and résumé analyzer
    let llm = LlmClient::new(LlmConfig {
        base_url: config.groq_base_url.clone(),
        model: config.llm_model.clone(),
        ..LlmConfig::new(config.groq_api_key.clone())
    })?;
    info!("LLM client initialized (model: {})", llm.model());
    let analyzer = Arc::new(LlmResumeAnalyzer::new(llm));

    info!(
        "Match defaults: top_n={}, min_score={:.2}",
        config.default_top_n, config.default_min_score
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        matcher,
        analyzer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
