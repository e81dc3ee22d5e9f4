use llm::{LLMClient, LLMError};

/// Text sent to the embedder in place of empty input, which providers reject.
pub const EMPTY_INPUT_PLACEHOLDER: &str = "empty content";

/// Embed `text`, substituting the placeholder for blank input. No retry and
/// no caching; provider errors propagate to the caller.
pub async fn embed_text(
    client: &dyn LLMClient,
    model: &str,
    text: &str,
) -> Result<Vec<f32>, LLMError> {
    let input = if text.trim().is_empty() {
        EMPTY_INPUT_PLACEHOLDER
    } else {
        text
    };
    client.embed(model, input).await
}
