pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::chat::handlers as chat;
use crate::editor::handlers as editor;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio document + edit session
        .route("/api/v1/portfolio", get(editor::handle_get_portfolio))
        .route("/api/v1/portfolio/field", put(editor::handle_set_field))
        .route(
            "/api/v1/portfolio/:collection/items",
            post(editor::handle_add_item),
        )
        .route(
            "/api/v1/portfolio/:collection/items/:id",
            put(editor::handle_update_item).delete(editor::handle_remove_item),
        )
        .route("/api/v1/portfolio/images", post(editor::handle_upload_image))
        .route("/api/v1/portfolio/export", get(editor::handle_export))
        .route("/api/v1/portfolio/import", post(editor::handle_import))
        .route("/api/v1/portfolio/reset", post(editor::handle_reset))
        // Access gate
        .route("/api/v1/auth/status", get(auth::handle_status))
        .route("/api/v1/auth/edit", post(auth::handle_request_edit))
        .route("/api/v1/auth/unlock", post(auth::handle_unlock))
        .route("/api/v1/auth/cancel", post(auth::handle_cancel))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        // Chat bridge
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/chat/history", get(chat::handle_history))
        .with_state(state)
}
