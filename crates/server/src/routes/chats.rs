use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bson::Document;
use std::sync::Arc;

use crate::store::{MessageStore, StoreError};
use crate::AppState;

/// GET /api/chats/:chatId
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<i64>,
) -> impl IntoResponse {
    match state.store.find_by_chat(chat_id).await {
        Ok(messages) => Json(messages).into_response(),
        Err(err) => {
            tracing::error!("Failed to retrieve messages: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve messages",
            )
                .into_response()
        }
    }
}

/// POST /api/chats/messages
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<Document>,
) -> impl IntoResponse {
    match state.store.create(draft).await {
        Ok(message) => Json(message).into_response(),
        Err(err) => {
            tracing::error!("Failed to create message: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create message",
            )
                .into_response()
        }
    }
}

/// PUT /api/chats/:chatId/messages/:messageId
pub async fn update_message(
    State(state): State<Arc<AppState>>,
    Path((chat_id, message_id)): Path<(i64, String)>,
    Json(patch): Json<Document>,
) -> impl IntoResponse {
    match state
        .store
        .update_by_chat_and_id(chat_id, &message_id, patch)
        .await
    {
        Ok(message) => Json(message).into_response(),
        Err(StoreError::NotFound) => {
            (StatusCode::NOT_FOUND, "Message not found").into_response()
        }
        Err(err) => {
            tracing::error!("Failed to update message: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update message",
            )
                .into_response()
        }
    }
}
