use std::collections::VecDeque;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;

/// A recording stand-in for one upstream collaborator (MapBiomas or Gemini):
/// serves queued replies and captures request bodies plus the auth headers.
pub struct MockUpstream {
    pub url: String,
    state: MockState,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

#[derive(Debug, Clone)]
struct MockState {
    replies: Arc<Mutex<VecDeque<(StatusCode, Value)>>>,
    seen_bodies: Arc<Mutex<Vec<Value>>>,
    seen_headers: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockUpstream {
    pub async fn start(replies: Vec<(StatusCode, Value)>) -> Self {
        let state = MockState {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            seen_bodies: Arc::new(Mutex::new(Vec::new())),
            seen_headers: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/upstream", post(mock_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let local_addr = listener
            .local_addr()
            .expect("listener address should resolve");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });

            server.await.expect("mock upstream should run");
        });

        Self {
            url: format!("http://{local_addr}/upstream"),
            state,
            shutdown_tx,
            task,
        }
    }

    pub async fn seen_bodies(&self) -> Vec<Value> {
        self.state.seen_bodies.lock().await.clone()
    }

    pub async fn seen_header_values(&self, name: &str) -> Vec<String> {
        self.state
            .seen_headers
            .lock()
            .await
            .iter()
            .filter(|(header_name, _)| header_name == name)
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub async fn shutdown(self) {
        self.shutdown_tx
            .send(())
            .expect("shutdown signal should send");
        self.task.await.expect("mock upstream task should join");
    }
}

async fn mock_handler(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut seen_headers = state.seen_headers.lock().await;
    for (name, value) in &headers {
        if let Ok(value) = value.to_str() {
            seen_headers.push((name.as_str().to_string(), value.to_string()));
        }
    }
    drop(seen_headers);

    state.seen_bodies.lock().await.push(payload);

    let reply = state
        .replies
        .lock()
        .await
        .pop_front()
        .unwrap_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "erro": "exhausted mock replies" }),
        ));

    (reply.0, Json(reply.1))
}

pub fn gemini_reply(text: &str) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({
            "candidates": [
                {
                    "content": {
                        "parts": [{ "text": text }]
                    }
                }
            ]
        }),
    )
}

pub fn mapbiomas_reply(alerts: Value) -> (StatusCode, Value) {
    (StatusCode::OK, json!({ "data": { "alerts": alerts } }))
}
