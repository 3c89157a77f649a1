use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::ConfigError;
use crate::config_env::{optional_trimmed_env, require_env};
use crate::models::{ChatMessage, ChatRole};

use super::gateway::{LlmGateway, LlmGatewayError, LlmGatewayFuture};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// Low temperature: the summaries should stay factual rather than creative.
const GENERATION_TEMPERATURE: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct GeminiGatewayConfig {
    pub generate_url: String,
    pub api_key: String,
    pub model: String,
}

impl GeminiGatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = require_env("GEMINI_API_KEY")?;
        let model =
            optional_trimmed_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let generate_url = optional_trimmed_env("GEMINI_GENERATE_URL")
            .unwrap_or_else(|| default_generate_url(&model));
        if !generate_url.starts_with("http://") && !generate_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("GEMINI_GENERATE_URL".to_string()));
        }

        Ok(Self {
            generate_url,
            api_key,
            model,
        })
    }
}

fn default_generate_url(model: &str) -> String {
    format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent")
}

#[derive(Clone)]
pub struct GeminiGateway {
    client: reqwest::Client,
    config: GeminiGatewayConfig,
}

impl GeminiGateway {
    pub fn new(client: reqwest::Client, config: GeminiGatewayConfig) -> Self {
        Self { client, config }
    }

    async fn send_once(&self, messages: &[ChatMessage]) -> Result<String, LlmGatewayError> {
        let response = self
            .client
            .post(&self.config.generate_url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&build_generate_request(messages))
            .send()
            .await
            .map_err(|err| LlmGatewayError::ProviderFailure(err.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|_| {
            LlmGatewayError::InvalidProviderPayload("response_body_read_failed".to_string())
        })?;

        if !status.is_success() {
            return Err(LlmGatewayError::ProviderFailure(format!(
                "status={} body={body}",
                status.as_u16()
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|_| {
            LlmGatewayError::InvalidProviderPayload("response_json_parse_failed".to_string())
        })?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| {
                LlmGatewayError::InvalidProviderPayload("missing_candidate".to_string())
            })?
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<String>();

        if text.is_empty() {
            return Err(LlmGatewayError::InvalidProviderPayload(
                "empty_candidate_text".to_string(),
            ));
        }

        Ok(text)
    }
}

impl LlmGateway for GeminiGateway {
    // One attempt per call: no retry and no fallback model.
    fn complete<'a>(&'a self, messages: &'a [ChatMessage]) -> LlmGatewayFuture<'a> {
        Box::pin(self.send_once(messages))
    }
}

/// System-role messages become the request's `systemInstruction`; the rest
/// are replayed in order with assistant turns mapped to Gemini's `model`
/// role.
fn build_generate_request(messages: &[ChatMessage]) -> Value {
    let system_text = messages
        .iter()
        .filter(|message| message.role == ChatRole::System)
        .map(|message| message.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let contents = messages
        .iter()
        .filter(|message| message.role != ChatRole::System)
        .map(|message| {
            json!({
                "role": gemini_role(message.role),
                "parts": [{ "text": message.content }]
            })
        })
        .collect::<Vec<_>>();

    let mut request = json!({
        "contents": contents,
        "generationConfig": { "temperature": GENERATION_TEMPERATURE }
    });

    if !system_text.is_empty() {
        request["systemInstruction"] = json!({ "parts": [{ "text": system_text }] });
    }

    request
}

fn gemini_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::Assistant => "model",
        ChatRole::System | ChatRole::User => "user",
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GenerateCandidate>,
}

#[derive(Debug, Deserialize)]
struct GenerateCandidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}
