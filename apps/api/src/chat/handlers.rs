//! Axum route handlers for the chat widget.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::bridge::welcome_message;
use crate::chat::markdown::{render, Block};
use crate::errors::AppError;
use crate::models::chat::Message;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: Message,
    /// The reply pre-rendered through the markdown subset.
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub welcome: Message,
    pub messages: Vec<Message>,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let text = req.message.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Message must not be empty".to_string()));
    }

    let doc = state.store.document().await;
    let message = state
        .chat
        .send(state.llm.as_ref(), state.config.prompt_style, &doc, text)
        .await;
    let blocks = render(&message.text);
    Ok(Json(ChatResponse { message, blocks }))
}

/// GET /api/v1/chat/history
pub async fn handle_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let doc = state.store.document().await;
    Json(HistoryResponse {
        welcome: welcome_message(&doc),
        messages: state.chat.history().await,
    })
}
