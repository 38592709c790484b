use std::sync::Arc;

use crate::auth::AccessGate;
use crate::chat::ChatSession;
use crate::config::Config;
use crate::llm_client::GenerationBackend;
use crate::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single owning container for the portfolio document.
    pub store: Arc<PortfolioStore>,
    pub gate: Arc<AccessGate>,
    /// Transient chat history for the active session.
    pub chat: Arc<ChatSession>,
    /// Pluggable generation backend. Production: `GeminiClient`.
    pub llm: Arc<dyn GenerationBackend>,
    pub config: Config,
}
