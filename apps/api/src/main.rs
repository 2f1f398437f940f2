mod agent;
mod config;
mod errors;
mod generation;
mod llm_client;
mod render;
mod routes;
mod search;
mod similarity;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agent::tools::ToolContext;
use crate::config::Config;
use crate::llm_client::{ContentGenerator, HfClient};
use crate::routes::build_router;
use crate::search::jobs::JobSearchClient;
use crate::search::posts::PostSearchClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobScout API v{}", env!("CARGO_PKG_VERSION"));

    // Content generator
    let llm: Arc<dyn ContentGenerator> = Arc::new(HfClient::new(config.hf_token.clone()));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Search backends
    let jobs = JobSearchClient::new(config.rapidapi_key.clone());
    let posts = PostSearchClient::new(config.serpapi_key.clone());
    info!("Search clients initialized");

    let state = AppState {
        tools: ToolContext { llm, jobs, posts },
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
