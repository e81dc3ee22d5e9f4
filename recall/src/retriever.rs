//! Tiered retrieval over the experience store.
//!
//! The cascade is an explicit ordered list of [`RecallStrategy`] values
//! rather than nested try/catch: the driver walks the list, absorbing
//! per-strategy failures, and the first strategy that answers at all is
//! terminal. Tiers degrade from best relevance (vector index) through some
//! relevance (keyword index) to structurally-valid-but-arbitrary (sample).

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use memory::{Experience, ExperienceStore, MemoryError};

/// A question and its embedding, owned by a single retrieval request.
pub struct RecallQuery {
    pub text: String,
    pub embedding: Vec<f32>,
}

/// One tier of the retrieval cascade.
#[async_trait]
pub trait RecallStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(
        &self,
        query: &RecallQuery,
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError>;
}

/// Tier 1: the store's native nearest-neighbour index.
pub struct VectorStrategy {
    store: Arc<dyn ExperienceStore>,
}

impl VectorStrategy {
    pub fn new(store: Arc<dyn ExperienceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecallStrategy for VectorStrategy {
    fn name(&self) -> &'static str {
        "vector"
    }

    async fn search(
        &self,
        query: &RecallQuery,
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        self.store.vector_search(&query.embedding, limit).await
    }
}

/// Tier 2: the alternate full-text index.
pub struct KeywordStrategy {
    store: Arc<dyn ExperienceStore>,
}

impl KeywordStrategy {
    pub fn new(store: Arc<dyn ExperienceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecallStrategy for KeywordStrategy {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn search(
        &self,
        query: &RecallQuery,
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        self.store.keyword_search(&query.text, limit).await
    }
}

/// Tier 3: up to `limit` arbitrary documents, no relevance criterion.
pub struct SampleStrategy {
    store: Arc<dyn ExperienceStore>,
}

impl SampleStrategy {
    pub fn new(store: Arc<dyn ExperienceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecallStrategy for SampleStrategy {
    fn name(&self) -> &'static str {
        "sample"
    }

    async fn search(
        &self,
        _query: &RecallQuery,
        limit: usize,
    ) -> Result<Vec<Experience>, MemoryError> {
        self.store.sample(limit).await
    }
}

/// Outcome of one cascade run. `used_fallback` is true whenever a tier other
/// than the first produced the terminal result.
pub struct Retrieval {
    pub experiences: Vec<Experience>,
    pub tier: &'static str,
    pub used_fallback: bool,
}

pub struct Retriever {
    strategies: Vec<Box<dyn RecallStrategy>>,
}

impl Retriever {
    /// The standard three-tier cascade over one store.
    pub fn new(store: Arc<dyn ExperienceStore>) -> Self {
        Self::with_strategies(vec![
            Box::new(VectorStrategy::new(store.clone())),
            Box::new(KeywordStrategy::new(store.clone())),
            Box::new(SampleStrategy::new(store)),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn RecallStrategy>>) -> Self {
        Self { strategies }
    }

    /// Try each tier in order. The first tier that answers is terminal even
    /// when it answers with zero documents: the cascade absorbs
    /// infrastructure failures, not low recall. If every tier fails, the
    /// last error propagates.
    pub async fn retrieve(
        &self,
        query: &RecallQuery,
        limit: usize,
    ) -> Result<Retrieval, MemoryError> {
        let mut last_err = None;
        for (tier, strategy) in self.strategies.iter().enumerate() {
            match strategy.search(query, limit).await {
                Ok(experiences) => {
                    debug!(
                        tier = strategy.name(),
                        count = experiences.len(),
                        "retrieval tier answered"
                    );
                    return Ok(Retrieval {
                        experiences,
                        tier: strategy.name(),
                        used_fallback: tier > 0,
                    });
                }
                Err(err) => {
                    warn!(tier = strategy.name(), %err, "retrieval tier failed");
                    last_err = Some(err);
                }
            }
        }
        Err(last_err
            .unwrap_or_else(|| MemoryError::Store("no retrieval strategies configured".into())))
    }
}
