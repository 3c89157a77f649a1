use axum::Json;
use axum::response::IntoResponse;
use shared::models::WelcomeResponse;

pub(super) async fn welcome() -> impl IntoResponse {
    Json(WelcomeResponse {
        mensagem: "🌱 API AIRA - Amazônia e Desmatamento está rodando!".to_string(),
    })
}
