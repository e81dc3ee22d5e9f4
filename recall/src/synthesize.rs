use std::sync::Arc;

use crate::prompt::{AnswerPrompt, PromptFragment, SYSTEM_PROMPT};
use llm::{LLMClient, LLMError};

/// Wraps the chat-completion call that turns a question plus context block
/// into a prose answer. One attempt per call; provider failures propagate.
pub struct Synthesizer {
    client: Arc<dyn LLMClient>,
    model: String,
}

impl Synthesizer {
    pub fn new(client: Arc<dyn LLMClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// `context` is the numbered snippet block from
    /// [`crate::prompt::build_context`], or an empty string when no relevant
    /// snippets survived filtering.
    pub async fn synthesize(&self, question: &str, context: &str) -> Result<String, LLMError> {
        let prompt = AnswerPrompt::new(context).build_prompt(question);
        self.client.chat(&self.model, SYSTEM_PROMPT, &prompt).await
    }
}
