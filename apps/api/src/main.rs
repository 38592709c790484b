mod auth;
mod chat;
mod config;
mod editor;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::AccessGate;
use crate::chat::ChatSession;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{LocalStore, PortfolioStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Agent API v{}", env!("CARGO_PKG_VERSION"));

    // Open durable key-value storage and load the document
    let local = LocalStore::open(&config.data_dir)?;
    let store = Arc::new(PortfolioStore::open(local.clone()));
    info!("Portfolio store opened at {}", config.data_dir.display());

    // Restore the access gate from the persisted authorization flag
    let gate = Arc::new(AccessGate::restore(local));

    // Initialize the generation-service client
    let llm = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!(
        "LLM client initialized (model: {}, style: {:?})",
        llm_client::MODEL,
        config.prompt_style
    );

    // Build app state
    let state = AppState {
        store,
        gate,
        chat: Arc::new(ChatSession::new()),
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
