pub mod gateway;
pub mod gemini;
pub mod prompts;

pub use gateway::{LlmGateway, LlmGatewayError, LlmGatewayFuture};
pub use gemini::{GeminiGateway, GeminiGatewayConfig};
pub use prompts::{PERSONA_SYSTEM_PROMPT, analysis_prompt};
