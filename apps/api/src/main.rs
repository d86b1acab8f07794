mod config;
mod errors;
mod fortune;
mod llm_client;
mod numerology;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::fortune::service::FortuneService;
use crate::llm_client::{ChatCompleter, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values, not on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fortune service v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_api_url.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    if llm.is_configured() {
        info!(
            "LLM client initialized (model: {}, timeout: {}s)",
            llm_client::MODEL,
            config.llm_timeout_secs
        );
    } else {
        warn!("OPENAI_API_KEY is not set; fortune lookups will be rejected until it is configured");
    }

    let fortune = FortuneService::new(Arc::new(llm), config.locale);
    info!("Fortune locale: {:?}", config.locale);

    let state = AppState::new(fortune);

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
