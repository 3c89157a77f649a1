use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::llm::LlmGatewayError;
use shared::mapbiomas::AlertsError;
use shared::models::ErrorResponse;
use tracing::error;

pub(super) fn bad_request_response(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            erro: message.to_string(),
        }),
    )
        .into_response()
}

pub(super) fn alerts_error_response(err: AlertsError) -> Response {
    error!("mapbiomas alert fetch failed: {err}");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            erro: err.to_string(),
        }),
    )
        .into_response()
}

pub(super) fn llm_error_response(err: LlmGatewayError) -> Response {
    error!("llm completion failed: {err}");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            erro: err.to_string(),
        }),
    )
        .into_response()
}
