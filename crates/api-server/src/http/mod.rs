use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use shared::chat::ChatSession;
use shared::llm::LlmGateway;
use shared::mapbiomas::AlertsClient;

mod alerts;
mod chat;
mod errors;
mod health;
mod root;

#[derive(Clone)]
pub struct AppState {
    pub alerts: AlertsClient,
    pub llm_gateway: Arc<dyn LlmGateway>,
    pub chat_session: ChatSession,
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root::welcome))
        .route("/healthz", get(health::healthz))
        .route("/analise-alertas", get(alerts::analyze_alerts))
        .route("/chat", post(chat::chat))
        .with_state(app_state)
}
