use crate::app_state::AppState;
use crate::chat_reply::ChatReply;
use axum::{extract::State, http::StatusCode, Json};
use chat_relay::{ChatError, ChatRequest};
use uuid::Uuid;

pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> (StatusCode, Json<ChatReply>) {
    let request_id = Uuid::new_v4();
    log::info!(
        "[{}] Chat request from {} (language={})",
        request_id,
        payload.site_key().unwrap_or("<no site>"),
        payload.language()
    );

    match state.chat.reply(&payload).await {
        Ok(reply) => (StatusCode::OK, Json(ChatReply { reply })),
        Err(e) => {
            match &e {
                ChatError::MissingApiKey => log::warn!("[{}] {}", request_id, e),
                ChatError::Completion(_) => log::error!("[{}] {}", request_id, e),
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatReply {
                    reply: e.to_string(),
                }),
            )
        }
    }
}
