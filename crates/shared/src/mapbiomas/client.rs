use chrono::{Duration, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::config::ConfigError;
use crate::config_env::{optional_trimmed_env, require_env};
use crate::models::Alert;

const DEFAULT_GRAPHQL_URL: &str = "https://plataforma.alerta.mapbiomas.org/api/v2/graphql";

#[derive(Debug, Clone)]
pub struct MapbiomasConfig {
    pub graphql_url: String,
    pub bearer_token: String,
}

impl MapbiomasConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let graphql_url = optional_trimmed_env("MAPBIOMAS_GRAPHQL_URL")
            .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string());
        if !graphql_url.starts_with("http://") && !graphql_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("MAPBIOMAS_GRAPHQL_URL".to_string()));
        }

        Ok(Self {
            graphql_url,
            bearer_token: require_env("MAPBIOMAS_TOKEN")?,
        })
    }
}

#[derive(Debug, Error)]
pub enum AlertsError {
    #[error("mapbiomas request failed: {0}")]
    RequestFailed(String),
    #[error("mapbiomas returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("mapbiomas returned an invalid payload: {0}")]
    InvalidPayload(String),
}

/// Query window for a look-back of `days_back` days: the end bound is always
/// today (UTC) and the start bound is exactly `days_back` days earlier. A
/// negative `days_back` is passed through unclamped and yields a start bound
/// in the future, matching what the upstream API receives from callers that
/// send one.
pub fn alert_period(days_back: i64) -> (NaiveDate, NaiveDate) {
    let end = Utc::now().date_naive();
    let start = end - Duration::days(days_back);
    (start, end)
}

#[derive(Clone)]
pub struct AlertsClient {
    client: reqwest::Client,
    config: MapbiomasConfig,
}

impl AlertsClient {
    pub fn new(client: reqwest::Client, config: MapbiomasConfig) -> Self {
        Self { client, config }
    }

    /// One GraphQL request per call: no retry and no pagination. Callers that
    /// need a deadline supply it through the `reqwest::Client` they pass in.
    pub async fn fetch_alerts(&self, days_back: i64) -> Result<Vec<Alert>, AlertsError> {
        let (start, end) = alert_period(days_back);
        debug!(%start, %end, "fetching mapbiomas alerts");

        let response = self
            .client
            .post(&self.config.graphql_url)
            .bearer_auth(&self.config.bearer_token)
            .json(&json!({ "query": alerts_query(start, end) }))
            .send()
            .await
            .map_err(|err| AlertsError::RequestFailed(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AlertsError::RequestFailed(err.to_string()))?;

        if !status.is_success() {
            return Err(AlertsError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GraphqlResponse = serde_json::from_str(&body)
            .map_err(|err| AlertsError::InvalidPayload(err.to_string()))?;

        // An absent data.alerts path is an empty result, not an error.
        Ok(parsed
            .data
            .and_then(|data| data.alerts)
            .unwrap_or_default())
    }
}

fn alerts_query(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        r#"{{
  alerts(startDate: "{start}", endDate: "{end}") {{
    id
    geomAreaHa
    date
    biome
    municipality
    state
    beforeImageUrl
    afterImageUrl
  }}
}}"#
    )
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<GraphqlData>,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    #[serde(default)]
    alerts: Option<Vec<Alert>>,
}
