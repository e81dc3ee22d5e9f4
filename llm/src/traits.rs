use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("invalid server url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response")]
    InvalidResponse,
}

/// Client for a language model server exposing completion and embedding
/// endpoints. The pipeline only ever holds this trait so tests can swap in
/// canned implementations.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Produce a single completion for `prompt` under `system` instructions.
    async fn chat(&self, model: &str, system: &str, prompt: &str) -> Result<String, LLMError>;

    /// Embed `input` into a fixed-length vector.
    async fn embed(&self, model: &str, input: &str) -> Result<Vec<f32>, LLMError>;
}
