#![allow(dead_code)]

use std::sync::Arc;

use api_server::http::{AppState, build_router};
use shared::chat::ChatSession;
use shared::llm::{GeminiGateway, GeminiGatewayConfig, PERSONA_SYSTEM_PROMPT};
use shared::mapbiomas::{AlertsClient, MapbiomasConfig};

pub const TEST_MAPBIOMAS_TOKEN: &str = "test-mapbiomas-token";
pub const TEST_GEMINI_KEY: &str = "test-gemini-key";

pub struct TestApp {
    pub router: axum::Router,
    pub chat_session: ChatSession,
}

pub fn build_test_app(mapbiomas_url: &str, gemini_url: &str) -> TestApp {
    let http_client = reqwest::Client::new();
    let chat_session = ChatSession::new(PERSONA_SYSTEM_PROMPT);

    let state = AppState {
        alerts: AlertsClient::new(
            http_client.clone(),
            MapbiomasConfig {
                graphql_url: mapbiomas_url.to_string(),
                bearer_token: TEST_MAPBIOMAS_TOKEN.to_string(),
            },
        ),
        llm_gateway: Arc::new(GeminiGateway::new(
            http_client,
            GeminiGatewayConfig {
                generate_url: gemini_url.to_string(),
                api_key: TEST_GEMINI_KEY.to_string(),
                model: "test-model".to_string(),
            },
        )),
        chat_session: chat_session.clone(),
    };

    TestApp {
        router: build_router(state),
        chat_session,
    }
}
