use std::sync::Arc;

use tokio::sync::Mutex;

use crate::llm::{LlmGateway, LlmGatewayError};
use crate::models::ChatMessage;

/// Process-wide conversation history shared by every `/chat` request.
///
/// The lock is held across the whole user-append, completion,
/// assistant-append sequence, so concurrent exchanges serialize and the
/// history always alternates user/assistant after the seed system message.
#[derive(Clone)]
pub struct ChatSession {
    history: Arc<Mutex<Vec<ChatMessage>>>,
}

impl ChatSession {
    pub fn new(persona: &str) -> Self {
        Self {
            history: Arc::new(Mutex::new(vec![ChatMessage::system(persona)])),
        }
    }

    pub async fn exchange(
        &self,
        gateway: &dyn LlmGateway,
        question: &str,
    ) -> Result<String, LlmGatewayError> {
        let mut history = self.history.lock().await;
        history.push(ChatMessage::user(question));

        let result = gateway.complete(history.as_slice()).await;
        match result {
            Ok(reply) => {
                history.push(ChatMessage::assistant(reply.clone()));
                Ok(reply)
            }
            Err(err) => {
                // Drop the unanswered user turn; the invariant is that every
                // user message in the history has an assistant reply.
                history.pop();
                Err(err)
            }
        }
    }

    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        self.history.lock().await.clone()
    }
}
