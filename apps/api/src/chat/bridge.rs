//! Chat bridge — one generation-service call per visitor turn.
//!
//! History is transient: it lives in memory for the active session and
//! is never persisted. The session lock is held across the outbound
//! call, so turns are strictly serialized — no concurrent in-flight
//! requests, no queueing, no cancellation.

use tokio::sync::Mutex;
use tracing::warn;

use crate::chat::prompts::{build_system_prompt, PromptStyle};
use crate::llm_client::{GenerationBackend, LlmError};
use crate::models::chat::Message;
use crate::models::portfolio::CareerContext;

/// Shown when the generation service fails for any reason — transport,
/// non-success status, malformed payload. Failures are not classified
/// and not retried.
pub const FALLBACK_MESSAGE: &str =
    "I'm having trouble accessing my memory banks. Please check your API configuration!";

/// Shown when the service succeeds but returns no usable text.
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "I'm sorry, I couldn't retrieve that information right now.";

pub struct ChatSession {
    history: Mutex<Vec<Message>>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            history: Mutex::new(Vec::new()),
        }
    }

    pub async fn history(&self) -> Vec<Message> {
        self.history.lock().await.clone()
    }

    /// Runs one chat turn. The visitor's message is recorded before the
    /// outbound call, so it survives a service failure; the reply is
    /// either the model's text or a fixed fallback string.
    pub async fn send(
        &self,
        backend: &dyn GenerationBackend,
        style: PromptStyle,
        doc: &CareerContext,
        text: &str,
    ) -> Message {
        let mut history = self.history.lock().await;
        history.push(Message::user(text));

        let system = build_system_prompt(style, doc);
        let reply_text = match backend.generate(&system, text).await {
            Ok(reply) => reply,
            Err(LlmError::EmptyContent) => EMPTY_RESPONSE_MESSAGE.to_string(),
            Err(e) => {
                warn!("Generation service call failed: {e}");
                FALLBACK_MESSAGE.to_string()
            }
        };

        let reply = Message::model(reply_text);
        history.push(reply.clone());
        reply
    }
}

/// The greeting shown above the session history. Derived from the
/// current document, not stored in history.
pub fn welcome_message(doc: &CareerContext) -> Message {
    Message::model(format!(
        "Welcome! I'm the AI agent for **{}**. I can tell you about my **technical stack**, \
         **past projects**, or **career goals**. What would you like to know?",
        doc.name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::models::chat::Role;

    struct ScriptedBackend {
        reply: Result<&'static str, fn() -> LlmError>,
        calls: AtomicU32,
    }

    impl ScriptedBackend {
        fn ok(reply: &'static str) -> Self {
            Self {
                reply: Ok(reply),
                calls: AtomicU32::new(0),
            }
        }

        fn failing(make: fn() -> LlmError) -> Self {
            Self {
                reply: Err(make),
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl GenerationBackend for ScriptedBackend {
        async fn generate(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(make) => Err(make()),
            }
        }
    }

    #[tokio::test]
    async fn test_successful_turn_records_both_messages() {
        let session = ChatSession::new();
        let backend = ScriptedBackend::ok("I led the PFMEA work.");
        let doc = CareerContext::default();

        let reply = session
            .send(&backend, PromptStyle::Professional, &doc, "Tell me about quality")
            .await;

        assert_eq!(reply.role, Role::Model);
        assert_eq!(reply.text, "I led the PFMEA work.");
        let history = session.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].text, "Tell me about quality");
        assert_eq!(history[1], reply);
    }

    #[tokio::test]
    async fn test_service_failure_yields_fallback_and_keeps_user_message() {
        let session = ChatSession::new();
        let backend = ScriptedBackend::failing(|| LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        let doc = CareerContext::default();

        let reply = session
            .send(&backend, PromptStyle::Professional, &doc, "hello?")
            .await;

        assert_eq!(reply.text, FALLBACK_MESSAGE);
        let history = session.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].text, "hello?");
        // Exactly one attempt — no retry.
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_model_output_gets_its_own_message() {
        let session = ChatSession::new();
        let backend = ScriptedBackend::failing(|| LlmError::EmptyContent);
        let doc = CareerContext::default();

        let reply = session
            .send(&backend, PromptStyle::Professional, &doc, "anything")
            .await;
        assert_eq!(reply.text, EMPTY_RESPONSE_MESSAGE);
    }

    #[tokio::test]
    async fn test_welcome_message_tracks_document_name() {
        let mut doc = CareerContext::default();
        doc.name = "Ada Lovelace".to_string();
        let welcome = welcome_message(&doc);
        assert!(welcome.text.contains("**Ada Lovelace**"));
        assert_eq!(welcome.role, Role::Model);
    }
}
