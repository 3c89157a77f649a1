use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use shared::models::{ChatRequest, ChatResponse};

use super::AppState;
use super::errors::{bad_request_response, llm_error_response};

pub(super) async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    let pergunta = req.pergunta.trim();
    if pergunta.is_empty() {
        return bad_request_response("pergunta must not be empty");
    }

    let resposta = match state
        .chat_session
        .exchange(state.llm_gateway.as_ref(), pergunta)
        .await
    {
        Ok(resposta) => resposta,
        Err(err) => return llm_error_response(err),
    };

    Json(ChatResponse {
        pergunta: pergunta.to_string(),
        resposta,
    })
    .into_response()
}
