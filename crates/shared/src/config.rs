use std::env;

use thiserror::Error;

use crate::llm::GeminiGatewayConfig;
use crate::mapbiomas::MapbiomasConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    MissingVar(String),
    #[error("invalid value in env var {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub mapbiomas: MapbiomasConfig,
    pub gemini: GeminiGatewayConfig,
}

impl ApiConfig {
    /// Both upstream secrets are required; a missing one fails startup
    /// entirely rather than serving in a degraded mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: env::var("API_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            mapbiomas: MapbiomasConfig::from_env()?,
            gemini: GeminiGatewayConfig::from_env()?,
        })
    }
}
