use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use shared::llm::analysis_prompt;
use shared::mapbiomas::format_alerts;
use shared::models::{AlertAnalysisResponse, ChatMessage};

use super::AppState;
use super::errors::{alerts_error_response, llm_error_response};

const DEFAULT_ANALYSIS_DAYS: i64 = 7;

#[derive(Debug, Deserialize)]
pub(super) struct AnalysisParams {
    dias: Option<i64>,
}

pub(super) async fn analyze_alerts(
    State(state): State<AppState>,
    Query(params): Query<AnalysisParams>,
) -> Response {
    let dias = params.dias.unwrap_or(DEFAULT_ANALYSIS_DAYS);

    let alerts = match state.alerts.fetch_alerts(dias).await {
        Ok(alerts) => alerts,
        Err(err) => return alerts_error_response(err),
    };

    let resumo = format_alerts(&alerts);
    let prompt = [ChatMessage::user(analysis_prompt(dias, &resumo))];

    let analise = match state.llm_gateway.complete(&prompt).await {
        Ok(analise) => analise,
        Err(err) => return llm_error_response(err),
    };

    Json(AlertAnalysisResponse { dias, analise }).into_response()
}
