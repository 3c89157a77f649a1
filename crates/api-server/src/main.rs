use std::net::SocketAddr;
use std::sync::Arc;

use api_server::http;
use shared::chat::ChatSession;
use shared::config::ApiConfig;
use shared::llm::{GeminiGateway, PERSONA_SYSTEM_PROMPT};
use shared::mapbiomas::AlertsClient;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "api_server=debug,axum=info".to_string()),
        )
        .init();

    let config = match ApiConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("failed to read config: {err}");
            std::process::exit(1);
        }
    };

    let http_client = reqwest::Client::new();

    let app = http::build_router(http::AppState {
        alerts: AlertsClient::new(http_client.clone(), config.mapbiomas),
        llm_gateway: Arc::new(GeminiGateway::new(http_client, config.gemini)),
        chat_session: ChatSession::new(PERSONA_SYSTEM_PROMPT),
    });

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .unwrap_or_else(|_| "127.0.0.1:8080".parse().expect("valid default bind addr"));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind should succeed");

    info!(
        "api server listening on {}",
        listener.local_addr().unwrap_or(addr)
    );
    axum::serve(listener, app).await.expect("server should run");
}
