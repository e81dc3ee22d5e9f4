use crate::traits::LLMError;
use crate::OllamaClient;

/// Create an [`OllamaClient`] using the `OLLAMA_URL` environment variable.
pub fn client_from_env() -> Result<OllamaClient, LLMError> {
    let url = std::env::var("OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".into());
    OllamaClient::new(&url)
}

/// Read the chat model name from the `COACH_CHAT_MODEL` environment variable.
pub fn chat_model_from_env() -> String {
    std::env::var("COACH_CHAT_MODEL").unwrap_or_else(|_| "gemma3:27b".into())
}

/// Read the embedding model name from the `COACH_EMBED_MODEL` environment variable.
pub fn embed_model_from_env() -> String {
    std::env::var("COACH_EMBED_MODEL").unwrap_or_else(|_| "nomic-embed-text".into())
}
