pub mod chats;

use crate::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chats/{chatId}", get(chats::list_messages))
        .route("/api/chats/messages", post(chats::create_message))
        .route(
            "/api/chats/{chatId}/messages/{messageId}",
            put(chats::update_message),
        )
        .with_state(state)
}
