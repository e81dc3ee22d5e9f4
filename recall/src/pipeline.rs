//! The end-to-end answer pipeline: embed the question, run the retrieval
//! cascade, filter for relevance, synthesize, and attach references.
//!
//! Everything is constructor-injected; the composition root owns the client
//! and store lifecycles. Each call is a strictly sequential chain of awaits
//! with no state shared across requests.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::embed::embed_text;
use crate::filter::{filter_relevant, Candidate};
use crate::prompt::build_context;
use crate::references::append_references;
use crate::retriever::{RecallQuery, Retriever};
use crate::synthesize::Synthesizer;
use llm::{LLMClient, LLMError};
use memory::{ExperienceStore, MemoryError};

#[derive(Debug, Error)]
pub enum RecallError {
    #[error(transparent)]
    Llm(#[from] LLMError),
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub chat_model: String,
    pub embed_model: String,
    /// Maximum candidates fetched per retrieval tier.
    pub context_limit: usize,
    /// Minimum similarity for a snippet to enter the answer context.
    pub context_threshold: f32,
    /// Stricter minimum used when looking for a single best match.
    pub match_threshold: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chat_model: "gemma3:27b".into(),
            embed_model: "nomic-embed-text".into(),
            context_limit: 5,
            context_threshold: 0.3,
            match_threshold: 0.8,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GeneratedAnswer {
    pub answer: String,
    pub context: Vec<Candidate>,
    pub used_fallback: bool,
    pub tier: String,
}

pub struct AnswerPipeline {
    client: Arc<dyn LLMClient>,
    retriever: Retriever,
    synthesizer: Synthesizer,
    config: PipelineConfig,
}

impl AnswerPipeline {
    pub fn new(
        client: Arc<dyn LLMClient>,
        store: Arc<dyn ExperienceStore>,
        config: PipelineConfig,
    ) -> Self {
        let retriever = Retriever::new(store);
        let synthesizer = Synthesizer::new(client.clone(), config.chat_model.clone());
        Self {
            client,
            retriever,
            synthesizer,
            config,
        }
    }

    /// Generate a grounded answer for `question`. An empty post-filter
    /// candidate set is a normal outcome: the synthesizer is told there is
    /// no context and no references block is appended.
    pub async fn answer(&self, question: &str) -> Result<GeneratedAnswer, RecallError> {
        let embedding = embed_text(self.client.as_ref(), &self.config.embed_model, question).await?;
        let query = RecallQuery {
            text: question.to_string(),
            embedding,
        };
        let retrieval = self
            .retriever
            .retrieve(&query, self.config.context_limit)
            .await?;
        let candidates = filter_relevant(
            &query.embedding,
            retrieval.experiences,
            self.config.context_threshold,
        );
        let context = build_context(&candidates);
        let answer = self.synthesizer.synthesize(question, &context).await?;
        let answer = if candidates.is_empty() {
            answer
        } else {
            append_references(&answer, &candidates)
        };
        info!(
            tier = retrieval.tier,
            candidates = candidates.len(),
            used_fallback = retrieval.used_fallback,
            "generated answer"
        );
        Ok(GeneratedAnswer {
            answer,
            context: candidates,
            used_fallback: retrieval.used_fallback,
            tier: retrieval.tier.to_string(),
        })
    }

    /// Find the single experience most similar to `text`, if any clears the
    /// strict match threshold.
    pub async fn best_match(&self, text: &str) -> Result<Option<Candidate>, RecallError> {
        let embedding = embed_text(self.client.as_ref(), &self.config.embed_model, text).await?;
        let query = RecallQuery {
            text: text.to_string(),
            embedding,
        };
        let retrieval = self
            .retriever
            .retrieve(&query, self.config.context_limit)
            .await?;
        let mut candidates = filter_relevant(
            &query.embedding,
            retrieval.experiences,
            self.config.match_threshold,
        );
        Ok(if candidates.is_empty() {
            None
        } else {
            Some(candidates.remove(0))
        })
    }
}
