use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::models::ChatMessage;

pub type LlmGatewayFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, LlmGatewayError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum LlmGatewayError {
    #[error("llm provider request failed: {0}")]
    ProviderFailure(String),
    #[error("llm provider returned an invalid payload: {0}")]
    InvalidProviderPayload(String),
}

/// Single-turn completion over an ordered message list. Implementations
/// return only the reply text; provider metadata is discarded.
pub trait LlmGateway: Send + Sync {
    fn complete<'a>(&'a self, messages: &'a [ChatMessage]) -> LlmGatewayFuture<'a>;
}
