//! HTTP client for interacting with an Ollama language model server.
//!
//! [`OllamaClient`] implements the [`LLMClient`] trait, requesting whole
//! completions and embeddings from a running Ollama instance.

use crate::traits::{LLMClient, LLMError};
use async_trait::async_trait;

use ollama_rs::{
    generation::{
        completion::request::GenerationRequest, embeddings::request::GenerateEmbeddingsRequest,
    },
    Ollama,
};

pub struct OllamaClient {
    inner: Ollama,
}

impl OllamaClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, LLMError> {
        let inner = Ollama::try_new(base_url.as_ref())
            .map_err(|_| LLMError::InvalidUrl(base_url.as_ref().to_string()))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl LLMClient for OllamaClient {
    async fn chat(&self, model: &str, system: &str, prompt: &str) -> Result<String, LLMError> {
        let req = GenerationRequest::new(model.to_string(), prompt.to_string())
            .system(system.to_string());
        let res = self
            .inner
            .generate(req)
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;
        Ok(res.response)
    }

    async fn embed(&self, model: &str, input: &str) -> Result<Vec<f32>, LLMError> {
        let req = GenerateEmbeddingsRequest::new(model.to_string(), input.into());
        let res = self
            .inner
            .generate_embeddings(req)
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;
        res.embeddings
            .into_iter()
            .next()
            .ok_or(LLMError::InvalidResponse)
    }
}
